use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How GST is levied on an invoice.
///
/// Intra-state supplies split the nominal rate evenly between the central
/// and the state authority; inter-state supplies carry a single integrated
/// component at the full rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaxType {
    /// CGST + SGST, each at half the nominal rate.
    #[default]
    #[serde(rename = "CGST_SGST")]
    CgstSgst,
    /// IGST at the full nominal rate.
    #[serde(rename = "IGST")]
    Igst,
}

impl TaxType {
    /// Wire code used by the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CgstSgst => "CGST_SGST",
            Self::Igst => "IGST",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CGST_SGST" => Some(Self::CgstSgst),
            "IGST" => Some(Self::Igst),
            _ => None,
        }
    }

    /// True when the nominal rate is split across two components.
    pub fn is_split(&self) -> bool {
        matches!(self, Self::CgstSgst)
    }
}

/// Kind of document being issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvoiceType {
    #[default]
    #[serde(rename = "TAX")]
    Tax,
    #[serde(rename = "PROFORMA")]
    Proforma,
}

impl InvoiceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tax => "TAX",
            Self::Proforma => "PROFORMA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TAX" => Some(Self::Tax),
            "PROFORMA" => Some(Self::Proforma),
            _ => None,
        }
    }

    /// Title printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Tax => "TAX INVOICE",
            Self::Proforma => "PROFORMA INVOICE",
        }
    }
}

/// A single invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    /// HSN classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<String>,
    pub quantity: Decimal,
    /// Price per unit of quantity.
    pub rate: Decimal,
}

/// Tax type plus nominal rate in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub tax_type: TaxType,
    pub rate_percent: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            tax_type: TaxType::CgstSgst,
            rate_percent: Decimal::new(18, 0),
        }
    }
}

/// Computed invoice totals.
///
/// Under [`TaxType::CgstSgst`] the two components are CGST and SGST; under
/// [`TaxType::Igst`] component A is IGST and component B is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line amounts.
    pub subtotal: Decimal,
    pub component_a: Decimal,
    pub component_b: Decimal,
    /// subtotal + component_a + component_b.
    pub total: Decimal,
    /// Total rounded to whole rupees (no fractional digits).
    pub rounded_total: Decimal,
}

impl InvoiceTotals {
    /// All-zero totals, as produced for an empty item list.
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        component_a: Decimal::ZERO,
        component_b: Decimal::ZERO,
        total: Decimal::ZERO,
        rounded_total: Decimal::ZERO,
    };

    pub fn cgst(&self, tax_type: TaxType) -> Decimal {
        match tax_type {
            TaxType::CgstSgst => self.component_a,
            TaxType::Igst => Decimal::ZERO,
        }
    }

    pub fn sgst(&self, tax_type: TaxType) -> Decimal {
        match tax_type {
            TaxType::CgstSgst => self.component_b,
            TaxType::Igst => Decimal::ZERO,
        }
    }

    pub fn igst(&self, tax_type: TaxType) -> Decimal {
        match tax_type {
            TaxType::CgstSgst => Decimal::ZERO,
            TaxType::Igst => self.component_a,
        }
    }

    /// Combined tax across both components.
    pub fn tax_total(&self) -> Decimal {
        self.component_a + self.component_b
    }
}

/// Per-line figures for the itemized GST column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBreakdown {
    /// quantity * rate.
    pub amount: Decimal,
    /// GST on the line at the full nominal rate.
    pub gst: Decimal,
    /// amount + gst.
    pub final_amount: Decimal,
}

/// The party being billed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_pincode: Option<String>,
}

impl Client {
    /// True when a separate ship-to destination was entered.
    pub fn has_shipping(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.shipping_name) || filled(&self.shipping_address)
    }
}

/// Raw invoice fields as entered on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    pub invoice_type: InvoiceType,
    pub tax_type: TaxType,
    pub invoice_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporter: Option<String>,
    #[serde(default)]
    pub bundle_count: u32,
    /// Nominal GST rate in percent.
    pub tax_rate: Decimal,
    pub client: Client,
    pub items: Vec<LineItem>,
}

impl InvoiceDetails {
    pub fn tax_config(&self) -> TaxConfig {
        TaxConfig {
            tax_type: self.tax_type,
            rate_percent: self.tax_rate,
        }
    }
}

/// An invoice with its totals snapshot.
///
/// The totals are computed once when the invoice is built and are kept
/// verbatim afterwards, including when the record is read back from
/// storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, assigned on persistence.
    pub number: Option<String>,
    pub details: InvoiceDetails,
    pub totals: InvoiceTotals,
}
