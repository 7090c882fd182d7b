//! Caller-supplied configuration.
//!
//! The engine reads no hidden global state: the fixed tax rate and the
//! display locale come in through [`CalcConfig`], validation thresholds
//! through [`ValidationConfig`], both passed explicitly per call site.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::EngineError;
use crate::format::Locale;
use crate::money::percentage_in_range;

/// Calculation configuration: the jurisdiction's fixed tax rate plus the
/// locale used for display formatting.
///
/// Construction fails for an out-of-range tax rate — that is a caller
/// contract violation, not user input, so it is fatal rather than reported
/// through [`crate::types::ValidationResult`].
#[derive(Debug, Clone)]
pub struct CalcConfig {
    tax_percentage: Decimal,
    locale: Locale,
}

impl CalcConfig {
    pub fn new(tax_percentage: Decimal, locale: Locale) -> Result<Self, EngineError> {
        if !percentage_in_range(tax_percentage) {
            return Err(EngineError::Config(format!(
                "tax percentage must be within [0, 100], got {tax_percentage}"
            )));
        }
        Ok(Self {
            tax_percentage,
            locale,
        })
    }

    pub fn tax_percentage(&self) -> Decimal {
        self.tax_percentage
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// Thresholds for the non-fatal validation heuristics.
///
/// These only ever produce warnings; they never affect `is_valid`.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Totals below this value draw a warning (possible data-entry mistake).
    pub minimum_total: Decimal,
    /// Discounts above this percentage draw a warning.
    pub high_discount_threshold: Decimal,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            minimum_total: Decimal::ZERO,
            high_discount_threshold: dec!(50),
        }
    }
}
