use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A candidate invoice line as entered by the user.
///
/// Quantity is carried signed so that invalid user input survives
/// deserialization and is reported as a validation error instead of
/// failing at the type boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Reference of the invoiced article.
    pub article_reference: String,
    /// Invoiced quantity — must be a positive integer to be valid.
    pub quantity: i64,
    /// Net price per unit — must be non-negative to be valid.
    pub unit_price: Decimal,
}

/// A normalized line: the input line plus its computed subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemComputed {
    pub article_reference: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// `round(quantity × unit_price, 2)`, floored at zero for invalid lines
    /// so best-effort display totals stay non-negative.
    pub line_subtotal: Decimal,
}

/// Calculated document totals.
///
/// Invariants (for valid inputs): `taxable_base = subtotal − discount_value`,
/// `tax_value = round(taxable_base × tax_percentage / 100, 2)`,
/// `total = taxable_base + tax_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line subtotals, rounded after summation.
    pub subtotal: Decimal,
    /// Per-draft discount percentage in [0, 100].
    pub discount_percentage: Decimal,
    /// `round(subtotal × discount_percentage / 100, 2)`.
    pub discount_value: Decimal,
    /// Subtotal after discount — the amount tax is computed on.
    pub taxable_base: Decimal,
    /// Fixed tax rate from configuration.
    pub tax_percentage: Decimal,
    /// `round(taxable_base × tax_percentage / 100, 2)`.
    pub tax_value: Decimal,
    /// `taxable_base + tax_value`.
    pub total: Decimal,
}

impl Totals {
    /// All-zero totals carrying the given rates (the result for a draft
    /// with no line items).
    pub fn zero(discount_percentage: Decimal, tax_percentage: Decimal) -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount_percentage,
            discount_value: Decimal::ZERO,
            taxable_base: Decimal::ZERO,
            tax_percentage,
            tax_value: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Display rendering of [`Totals`].
///
/// Derived data only: recomputed whenever totals change, never stored as
/// authoritative state. Deliberately not `Deserialize` — formatted strings
/// must never be parsed back as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    pub subtotal: String,
    pub discount_percentage: String,
    pub discount_value: String,
    pub taxable_base: String,
    pub tax_percentage: String,
    pub tax_value: String,
    pub total: String,
}

/// An invoice not yet accepted or persisted, subject to recalculation and
/// validation while the user edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Customer reference — required non-empty.
    pub customer_reference: String,
    /// Billing address — required non-empty.
    pub address: String,
    /// Contact phone — required non-empty.
    pub phone: String,
    /// Free-text observations, at most 500 characters.
    pub observations: Option<String>,
    /// Per-draft discount percentage.
    pub discount_percentage: Decimal,
    /// Candidate line items — must be non-empty to be valid.
    pub lines: Vec<LineItem>,
    /// Totals as last calculated by the caller; possibly stale with respect
    /// to the current line items. `None` for a never-calculated draft.
    pub totals: Option<Totals>,
}

/// Structural result of a calculation pass.
///
/// Always produced, even for invalid drafts: per-line problems are listed
/// in `line_issues` and the totals are best-effort so partial drafts can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub lines: Vec<LineItemComputed>,
    pub totals: Totals,
    pub formatted: FormattedTotals,
    /// Normalization problems, each prefixed with the line's position.
    pub line_issues: Vec<String>,
}

/// Outcome of validating a draft against the business rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub is_valid: bool,
    /// Blocking problems, in rule-evaluation order, safe to render directly.
    pub errors: Vec<String>,
    /// Advisory findings; submission may proceed.
    pub warnings: Vec<String>,
    /// Totals freshly recomputed from the draft's current line items,
    /// independent of whatever the caller held in `InvoiceDraft::totals`.
    pub recalculated_totals: Totals,
}
