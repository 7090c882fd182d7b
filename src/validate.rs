//! Business-rule validation for invoice drafts.
//!
//! Rules are evaluated as an explicit ordered list — all findings are
//! collected, not just the first. Errors block submission; warnings are
//! advisory. The validator never mutates its inputs and always reports
//! totals freshly recomputed from the draft, so callers can detect drift
//! against whatever totals they were holding.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::ValidationConfig;
use crate::error::ValidationIssue;
use crate::money::percentage_in_range;
use crate::types::{CalculationResult, InvoiceDraft, Totals, ValidationResult};

/// Maximum length of the free-text observations field, in characters.
pub const OBSERVATIONS_MAX_LEN: usize = 500;

/// Observations length at which the near-limit warning fires (90% of max).
const OBSERVATIONS_WARN_LEN: usize = OBSERVATIONS_MAX_LEN * 9 / 10;

/// Two monetary values within this distance are considered equal when
/// checking for stale totals — line-level rounding may legitimately move a
/// derived field by one cent.
const STALE_TOLERANCE: Decimal = dec!(0.01);

/// Validate `draft` against the calculation result freshly produced for it.
///
/// `calc` must come from [`crate::engine::calculate`] on the same draft;
/// the facade's [`crate::engine::validate`] wires the two together.
pub fn validate_draft(
    draft: &InvoiceDraft,
    calc: &CalculationResult,
    rules: &ValidationConfig,
) -> ValidationResult {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Header fields — all required non-empty.
    if draft.customer_reference.trim().is_empty() {
        errors.push(
            ValidationIssue::new("customer_reference", "customer reference must not be empty")
                .to_string(),
        );
    }
    if draft.address.trim().is_empty() {
        errors.push(ValidationIssue::new("address", "address must not be empty").to_string());
    }
    if draft.phone.trim().is_empty() {
        errors.push(ValidationIssue::new("phone", "phone must not be empty").to_string());
    }

    // Observations — bounded free text.
    if let Some(observations) = &draft.observations {
        let len = observations.chars().count();
        if len > OBSERVATIONS_MAX_LEN {
            errors.push(
                ValidationIssue::new(
                    "observations",
                    format!("observations must not exceed {OBSERVATIONS_MAX_LEN} characters, got {len}"),
                )
                .to_string(),
            );
        } else if len >= OBSERVATIONS_WARN_LEN {
            warnings.push(
                ValidationIssue::new(
                    "observations",
                    format!("observations near the {OBSERVATIONS_MAX_LEN}-character limit ({len} characters)"),
                )
                .to_string(),
            );
        }
    }

    // Line items.
    if draft.lines.is_empty() {
        errors.push(
            ValidationIssue::new("lines", "invoice must contain at least one item").to_string(),
        );
    }
    errors.extend(calc.line_issues.iter().cloned());

    // Discount sanity — out of range is an error, never clamped.
    if !percentage_in_range(draft.discount_percentage) {
        errors.push(
            ValidationIssue::new(
                "discount_percentage",
                format!(
                    "discount percentage must be within [0, 100], got {}",
                    draft.discount_percentage
                ),
            )
            .to_string(),
        );
    }

    // Totals consistency — guard against validating out-of-date totals.
    if let Some(held) = &draft.totals {
        if totals_differ(held, &calc.totals) {
            errors.push(
                ValidationIssue::new("totals", "totals are stale, recalculate before submitting")
                    .to_string(),
            );
        }
    }

    // Non-fatal heuristics.
    if calc.totals.total < rules.minimum_total {
        warnings.push(
            ValidationIssue::new(
                "totals.total",
                format!(
                    "total {} is below the minimum threshold {}",
                    calc.totals.total, rules.minimum_total
                ),
            )
            .to_string(),
        );
    }
    if draft.discount_percentage > rules.high_discount_threshold {
        warnings.push(
            ValidationIssue::new(
                "discount_percentage",
                format!(
                    "discount of {}% exceeds the high-discount threshold of {}% — possible data-entry mistake",
                    draft.discount_percentage, rules.high_discount_threshold
                ),
            )
            .to_string(),
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        recalculated_totals: calc.totals.clone(),
    }
}

/// Whether any field of two totals differs beyond [`STALE_TOLERANCE`].
fn totals_differ(held: &Totals, fresh: &Totals) -> bool {
    let pairs = [
        (held.subtotal, fresh.subtotal),
        (held.discount_percentage, fresh.discount_percentage),
        (held.discount_value, fresh.discount_value),
        (held.taxable_base, fresh.taxable_base),
        (held.tax_percentage, fresh.tax_percentage),
        (held.tax_value, fresh.tax_value),
        (held.total, fresh.total),
    ];
    pairs.iter().any(|(a, b)| (*a - *b).abs() > STALE_TOLERANCE)
}
