//! Line-item normalization and totals aggregation.
//!
//! Both functions are pure: given the same inputs they produce bit-for-bit
//! identical output, with no floating-point nondeterminism.

use rust_decimal::Decimal;

use crate::error::ValidationIssue;
use crate::money::{percent_of, round_money};
use crate::types::{LineItem, LineItemComputed, Totals};

/// Normalize a single line into its computed form.
///
/// Constraint violations (non-positive quantity, negative unit price) are
/// reported as issues tagged with the line's position and article
/// reference; the subtotal is still computed best-effort so invalid drafts
/// remain displayable.
pub fn normalize_line(index: usize, line: &LineItem) -> (LineItemComputed, Vec<ValidationIssue>) {
    let mut issues = Vec::new();

    if line.quantity <= 0 {
        issues.push(ValidationIssue::new(
            format!("lines[{index}].quantity"),
            format!(
                "invalid quantity {} for article '{}' (must be a positive integer)",
                line.quantity, line.article_reference
            ),
        ));
    }

    if line.unit_price.is_sign_negative() {
        issues.push(ValidationIssue::new(
            format!("lines[{index}].unit_price"),
            format!(
                "invalid unit price {} for article '{}' (must not be negative)",
                line.unit_price, line.article_reference
            ),
        ));
    }

    let line_subtotal = round_money(Decimal::from(line.quantity) * line.unit_price)
        .max(Decimal::ZERO);

    let computed = LineItemComputed {
        article_reference: line.article_reference.clone(),
        quantity: line.quantity,
        unit_price: line.unit_price,
        line_subtotal,
    };

    (computed, issues)
}

/// Aggregate normalized lines into document totals.
///
/// The subtotal is rounded once after summation (lines are already
/// rounded); discount and tax are each rounded once when derived. An empty
/// line sequence yields all-zero totals — flagging that as an error is the
/// validator's job, not the calculator's.
pub fn calculate_totals(
    lines: &[LineItemComputed],
    discount_percentage: Decimal,
    tax_percentage: Decimal,
) -> Totals {
    let subtotal = round_money(lines.iter().map(|l| l.line_subtotal).sum());
    let discount_value = percent_of(subtotal, discount_percentage);
    let taxable_base = subtotal - discount_value;
    let tax_value = percent_of(taxable_base, tax_percentage);
    let total = taxable_base + tax_value;

    Totals {
        subtotal,
        discount_percentage,
        discount_value,
        taxable_base,
        tax_percentage,
        tax_value,
        total,
    }
}
