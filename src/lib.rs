//! # facturacion
//!
//! Invoice draft totals calculation & validation engine: given an invoice
//! header and its line items, derive subtotal, discount, taxable base, tax,
//! and grand total, render display strings, and check the whole structure
//! against business rules before it may reach persistence.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The engine is pure and stateless: every call is deterministic
//! given its inputs, holds no state across calls, and may be invoked
//! concurrently for independent drafts with no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use facturacion::{CalcConfig, DraftBuilder, Locale, ValidationConfig, engine};
//! use rust_decimal_macros::dec;
//!
//! let cfg = CalcConfig::new(dec!(12), Locale::es_es()).unwrap();
//!
//! let draft = DraftBuilder::new("CLI-042")
//!     .address("Calle Mayor 1, Madrid")
//!     .phone("+34 600 000 000")
//!     .discount(dec!(10))
//!     .add_line("ART-1", 3, dec!(10.00))
//!     .build();
//!
//! let calc = engine::calculate(&draft, &cfg);
//! assert_eq!(calc.totals.total, dec!(30.24));
//! assert_eq!(calc.formatted.total, "30,24 €");
//!
//! let report = engine::validate(&draft, &cfg, &ValidationConfig::default());
//! assert!(report.is_valid);
//! ```
//!
//! ## Error model
//!
//! Business-rule problems — missing header fields, invalid lines, stale
//! totals — are returned as data in
//! [`ValidationResult`](types::ValidationResult), because a draft is
//! expected to be incomplete during editing. Only caller contract
//! violations (an out-of-range tax rate in [`CalcConfig`]) are fatal.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod money;
pub mod totals;
pub mod types;
pub mod validate;

pub use builder::DraftBuilder;
pub use config::{CalcConfig, ValidationConfig};
pub use error::{EngineError, ValidationIssue};
pub use format::Locale;
pub use types::{
    CalculationResult, FormattedTotals, InvoiceDraft, LineItem, LineItemComputed, Totals,
    ValidationResult,
};
