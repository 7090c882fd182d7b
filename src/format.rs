//! Display formatting for totals.
//!
//! Pure and stateless: numeric totals in, locale-formatted strings out.
//! Formatting never participates in calculation or validation, and the
//! produced strings are presentation-only.

use rust_decimal::Decimal;

use crate::money::round_money;
use crate::types::{FormattedTotals, Totals};

/// Locale/currency configuration for display rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Currency symbol, e.g. "€" or "$".
    pub currency_symbol: String,
    /// Whether the symbol precedes the amount ("$1,234.56") or trails it
    /// ("1.234,56 €").
    pub symbol_leading: bool,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Thousands separator for the integer part.
    pub group_separator: char,
}

impl Locale {
    /// Spanish (es-ES) conventions: trailing "€", comma decimal separator,
    /// dot grouping.
    pub fn es_es() -> Self {
        Self {
            currency_symbol: "€".into(),
            symbol_leading: false,
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    /// US English (en-US) conventions: leading "$", dot decimal separator,
    /// comma grouping.
    pub fn en_us() -> Self {
        Self {
            currency_symbol: "$".into(),
            symbol_leading: true,
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

/// Render a monetary value with currency symbol, digit grouping, and
/// exactly two fraction digits.
pub fn format_money(value: Decimal, locale: &Locale) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let fixed = format!("{:.2}", round_money(value).abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator);
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    let number = format!("{sign}{grouped}{}{frac_part}", locale.decimal_separator);
    if locale.symbol_leading {
        format!("{}{number}", locale.currency_symbol)
    } else {
        format!("{number} {}", locale.currency_symbol)
    }
}

/// Render a percentage with two fraction digits and a "%" suffix.
pub fn format_percentage(value: Decimal, locale: &Locale) -> String {
    let fixed = format!("{value:.2}");
    let localized = fixed.replace('.', &locale.decimal_separator.to_string());
    format!("{localized}%")
}

/// Render every field of `totals` for display.
pub fn format_totals(totals: &Totals, locale: &Locale) -> FormattedTotals {
    FormattedTotals {
        subtotal: format_money(totals.subtotal, locale),
        discount_percentage: format_percentage(totals.discount_percentage, locale),
        discount_value: format_money(totals.discount_value, locale),
        taxable_base: format_money(totals.taxable_base, locale),
        tax_percentage: format_percentage(totals.tax_percentage, locale),
        tax_value: format_money(totals.tax_value, locale),
        total: format_money(totals.total, locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn spanish_money_format() {
        let es = Locale::es_es();
        assert_eq!(format_money(dec!(0), &es), "0,00 €");
        assert_eq!(format_money(dec!(30.24), &es), "30,24 €");
        assert_eq!(format_money(dec!(1234567.89), &es), "1.234.567,89 €");
    }

    #[test]
    fn us_money_format() {
        let us = Locale::en_us();
        assert_eq!(format_money(dec!(1234.50), &us), "$1,234.50");
        assert_eq!(format_money(dec!(999.99), &us), "$999.99");
        assert_eq!(format_money(dec!(-81), &us), "$-81.00");
    }

    #[test]
    fn percentage_format() {
        assert_eq!(format_percentage(dec!(10), &Locale::es_es()), "10,00%");
        assert_eq!(format_percentage(dec!(12.5), &Locale::en_us()), "12.50%");
    }

    #[test]
    fn formats_every_totals_field() {
        let totals = Totals {
            subtotal: dec!(30.00),
            discount_percentage: dec!(10),
            discount_value: dec!(3.00),
            taxable_base: dec!(27.00),
            tax_percentage: dec!(12),
            tax_value: dec!(3.24),
            total: dec!(30.24),
        };
        let formatted = format_totals(&totals, &Locale::es_es());
        assert_eq!(formatted.subtotal, "30,00 €");
        assert_eq!(formatted.discount_percentage, "10,00%");
        assert_eq!(formatted.discount_value, "3,00 €");
        assert_eq!(formatted.taxable_base, "27,00 €");
        assert_eq!(formatted.tax_percentage, "12,00%");
        assert_eq!(formatted.tax_value, "3,24 €");
        assert_eq!(formatted.total, "30,24 €");
    }
}
