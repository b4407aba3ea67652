use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::calc::try_compute_totals;
use super::error::{InvoiceError, join_errors};
use super::types::*;
use super::validation;

/// Builder for constructing validated invoices with their totals.
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .tax(TaxType::Igst, dec!(18))
///     .client(ClientBuilder::new("Sharma Traders").city("Pune").state("Maharashtra").build())
///     .add_item(LineItemBuilder::new("TMT bar 12mm", dec!(2), dec!(100)).hsn_code("7214").build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.totals.igst(TaxType::Igst), dec!(36));
/// ```
pub struct InvoiceBuilder {
    number: Option<String>,
    invoice_type: InvoiceType,
    tax_type: TaxType,
    tax_rate: Decimal,
    invoice_date: NaiveDate,
    po_number: Option<String>,
    vehicle_number: Option<String>,
    transporter: Option<String>,
    bundle_count: u32,
    client: Option<Client>,
    items: Vec<LineItem>,
}

impl InvoiceBuilder {
    pub fn new(invoice_date: NaiveDate) -> Self {
        let config = TaxConfig::default();
        Self {
            number: None,
            invoice_type: InvoiceType::Tax,
            tax_type: config.tax_type,
            tax_rate: config.rate_percent,
            invoice_date,
            po_number: None,
            vehicle_number: None,
            transporter: None,
            bundle_count: 0,
            client: None,
            items: Vec::new(),
        }
    }

    /// Invoice number, normally assigned by the backend on submission.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn invoice_type(mut self, invoice_type: InvoiceType) -> Self {
        self.invoice_type = invoice_type;
        self
    }

    pub fn tax(mut self, tax_type: TaxType, rate_percent: Decimal) -> Self {
        self.tax_type = tax_type;
        self.tax_rate = rate_percent;
        self
    }

    pub fn tax_config(self, config: TaxConfig) -> Self {
        self.tax(config.tax_type, config.rate_percent)
    }

    pub fn po_number(mut self, po: impl Into<String>) -> Self {
        self.po_number = Some(po.into());
        self
    }

    pub fn vehicle_number(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle_number = Some(vehicle.into());
        self
    }

    pub fn transporter(mut self, transporter: impl Into<String>) -> Self {
        self.transporter = Some(transporter.into());
        self
    }

    pub fn bundle_count(mut self, count: u32) -> Self {
        self.bundle_count = count;
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Build the invoice, running validation and then computing totals.
    /// Returns all validation errors (not just the first), or
    /// [`InvoiceError::Arithmetic`] when the totals exceed the decimal range.
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let (number, details) = self.into_parts()?;

        let errors = validation::validate_details(&details);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "invoice failed validation");
            return Err(InvoiceError::Validation(join_errors(&errors)));
        }

        finish(number, details)
    }

    /// Build without validation, for previews of incomplete forms.
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        let (number, details) = self.into_parts()?;
        finish(number, details)
    }

    fn into_parts(self) -> Result<(Option<String>, InvoiceDetails), InvoiceError> {
        let client = self
            .client
            .ok_or_else(|| InvoiceError::Builder("client is required".into()))?;

        if self.items.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }

        let details = InvoiceDetails {
            invoice_type: self.invoice_type,
            tax_type: self.tax_type,
            invoice_date: self.invoice_date,
            po_number: self.po_number,
            vehicle_number: self.vehicle_number,
            transporter: self.transporter,
            bundle_count: self.bundle_count,
            tax_rate: self.tax_rate,
            client,
            items: self.items,
        };
        Ok((self.number, details))
    }
}

fn finish(number: Option<String>, details: InvoiceDetails) -> Result<Invoice, InvoiceError> {
    let totals = try_compute_totals(&details.items, details.tax_type, details.tax_rate)
        .inspect_err(|e| debug!(error = %e, "invoice totals overflowed"))?;
    debug!(
        items = details.items.len(),
        tax_type = details.tax_type.code(),
        rounded_total = %totals.rounded_total,
        "invoice totals computed"
    );
    Ok(Invoice {
        number,
        details,
        totals,
    })
}

/// Builder for the billed [`Client`].
pub struct ClientBuilder {
    client: Client,
}

impl ClientBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            client: Client {
                name: name.into(),
                ..Client::default()
            },
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.client.gstin = Some(gstin.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.client.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.client.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.client.state = state.into();
        self
    }

    pub fn pincode(mut self, pincode: impl Into<String>) -> Self {
        self.client.pincode = pincode.into();
        self
    }

    /// Separate ship-to destination. Blank parts fall back to the billing
    /// values when printed.
    pub fn ship_to(
        mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        self.client.shipping_name = Some(name.into());
        self.client.shipping_address = Some(address.into());
        self.client.shipping_city = Some(city.into());
        self.client.shipping_state = Some(state.into());
        self.client.shipping_pincode = Some(pincode.into());
        self
    }

    pub fn build(self) -> Client {
        self.client
    }
}

/// Builder for [`LineItem`].
pub struct LineItemBuilder {
    description: String,
    hsn_code: Option<String>,
    quantity: Decimal,
    rate: Decimal,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_code: None,
            quantity,
            rate,
        }
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = Some(code.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            hsn_code: self.hsn_code,
            quantity: self.quantity,
            rate: self.rate,
        }
    }
}
