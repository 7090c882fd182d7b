use rust_decimal::Decimal;

use crate::types::{InvoiceDraft, LineItem};

/// Fluent builder for [`InvoiceDraft`].
///
/// `build` never fails: a draft is allowed to be incomplete while it is
/// being edited, and every business-rule problem is reported by
/// [`crate::engine::validate`] rather than at construction time.
///
/// ```
/// use facturacion::DraftBuilder;
/// use rust_decimal_macros::dec;
///
/// let draft = DraftBuilder::new("CLI-042")
///     .address("Calle Mayor 1, Madrid")
///     .phone("+34 600 000 000")
///     .discount(dec!(10))
///     .add_line("ART-1", 3, dec!(10.00))
///     .build();
///
/// assert_eq!(draft.lines.len(), 1);
/// ```
pub struct DraftBuilder {
    customer_reference: String,
    address: String,
    phone: String,
    observations: Option<String>,
    discount_percentage: Decimal,
    lines: Vec<LineItem>,
}

impl DraftBuilder {
    pub fn new(customer_reference: impl Into<String>) -> Self {
        Self {
            customer_reference: customer_reference.into(),
            address: String::new(),
            phone: String::new(),
            observations: None,
            discount_percentage: Decimal::ZERO,
            lines: Vec::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.observations = Some(observations.into());
        self
    }

    pub fn discount(mut self, percentage: Decimal) -> Self {
        self.discount_percentage = percentage;
        self
    }

    pub fn add_line(
        mut self,
        article_reference: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Self {
        self.lines.push(LineItem {
            article_reference: article_reference.into(),
            quantity,
            unit_price,
        });
        self
    }

    pub fn build(self) -> InvoiceDraft {
        InvoiceDraft {
            customer_reference: self.customer_reference,
            address: self.address,
            phone: self.phone,
            observations: self.observations,
            discount_percentage: self.discount_percentage,
            lines: self.lines,
            totals: None,
        }
    }
}
