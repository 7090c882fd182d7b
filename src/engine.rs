//! Invoice assembly facade.
//!
//! The two externally visible operations: [`calculate`] always produces a
//! structural result (problems become data, never panics or errors), and
//! [`validate`] is the single gate deciding whether a draft may proceed to
//! submission.

use crate::config::{CalcConfig, ValidationConfig};
use crate::format::format_totals;
use crate::totals::{calculate_totals, normalize_line};
use crate::types::{CalculationResult, InvoiceDraft, ValidationResult};
use crate::validate::validate_draft;

/// Normalize the draft's lines, aggregate totals, and render them.
///
/// Always succeeds structurally: per-line problems are surfaced in
/// `line_issues` and totals are best-effort, so partial or invalid drafts
/// can still be displayed.
pub fn calculate(draft: &InvoiceDraft, cfg: &CalcConfig) -> CalculationResult {
    let mut lines = Vec::with_capacity(draft.lines.len());
    let mut line_issues = Vec::new();

    for (index, line) in draft.lines.iter().enumerate() {
        let (computed, issues) = normalize_line(index, line);
        line_issues.extend(issues.iter().map(ToString::to_string));
        lines.push(computed);
    }

    let totals = calculate_totals(&lines, draft.discount_percentage, cfg.tax_percentage());
    let formatted = format_totals(&totals, cfg.locale());

    CalculationResult {
        lines,
        totals,
        formatted,
        line_issues,
    }
}

/// Recalculate the draft and check it against the business rules.
///
/// Errors block submission and must all be shown; warnings are advisory.
pub fn validate(
    draft: &InvoiceDraft,
    cfg: &CalcConfig,
    rules: &ValidationConfig,
) -> ValidationResult {
    let calc = calculate(draft, cfg);
    validate_draft(draft, &calc, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;
    use crate::types::LineItem;
    use rust_decimal_macros::dec;

    fn config() -> CalcConfig {
        CalcConfig::new(dec!(12), Locale::es_es()).unwrap()
    }

    #[test]
    fn calculate_reports_line_issues_without_failing() {
        let draft = InvoiceDraft {
            customer_reference: "CLI-001".into(),
            address: "Gran Vía 10".into(),
            phone: "600123123".into(),
            observations: None,
            discount_percentage: dec!(0),
            lines: vec![
                LineItem {
                    article_reference: "ART-OK".into(),
                    quantity: 2,
                    unit_price: dec!(5.00),
                },
                LineItem {
                    article_reference: "ART-BAD".into(),
                    quantity: -1,
                    unit_price: dec!(3.00),
                },
            ],
            totals: None,
        };

        let result = calculate(&draft, &config());
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.line_issues.len(), 1);
        assert!(result.line_issues[0].starts_with("lines[1].quantity"));
        // Best-effort totals still come out for display.
        assert_eq!(result.totals.subtotal, dec!(10.00));
        assert_eq!(result.formatted.subtotal, "10,00 €");
    }

    #[test]
    fn validate_composes_calculate_and_rules() {
        let draft = InvoiceDraft {
            customer_reference: String::new(),
            address: "Gran Vía 10".into(),
            phone: "600123123".into(),
            observations: None,
            discount_percentage: dec!(0),
            lines: vec![],
            totals: None,
        };

        let result = validate(&draft, &config(), &ValidationConfig::default());
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("customer reference")));
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.contains("invoice must contain at least one item"))
        );
    }
}
