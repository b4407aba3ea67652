use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::*;

/// Wire shape of an invoice as exchanged with the backend.
///
/// Sent on submission with `invoice_number` unset; records read back carry
/// the number assigned by the backend. Tax components travel as separate
/// `cgst`, `sgst` and `igst` fields, the unused ones being zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(flatten)]
    pub details: InvoiceDetails,
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
    pub rounded_total: Decimal,
}

impl From<&Invoice> for InvoicePayload {
    fn from(invoice: &Invoice) -> Self {
        let tax_type = invoice.details.tax_type;
        let totals = &invoice.totals;
        Self {
            invoice_number: invoice.number.clone(),
            details: invoice.details.clone(),
            subtotal: totals.subtotal,
            cgst: totals.cgst(tax_type),
            sgst: totals.sgst(tax_type),
            igst: totals.igst(tax_type),
            total: totals.total,
            rounded_total: totals.rounded_total,
        }
    }
}

impl From<InvoicePayload> for Invoice {
    /// Rebuild the record from stored values. Totals are taken as stored,
    /// never recomputed.
    fn from(payload: InvoicePayload) -> Self {
        let (component_a, component_b) = match payload.details.tax_type {
            TaxType::CgstSgst => (payload.cgst, payload.sgst),
            TaxType::Igst => (payload.igst, Decimal::ZERO),
        };
        Invoice {
            number: payload.invoice_number,
            details: payload.details,
            totals: InvoiceTotals {
                subtotal: payload.subtotal,
                component_a,
                component_b,
                total: payload.total,
                rounded_total: payload.rounded_total,
            },
        }
    }
}

impl Invoice {
    /// Payload to send to the backend.
    pub fn to_payload(&self) -> InvoicePayload {
        InvoicePayload::from(self)
    }
}

#[cfg(feature = "json")]
impl InvoicePayload {
    pub fn to_json(&self) -> Result<String, super::error::InvoiceError> {
        serde_json::to_string(self)
            .map_err(|e| super::error::InvoiceError::Render(format!("failed to encode payload: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, super::error::InvoiceError> {
        serde_json::from_str(json).map_err(|e| {
            super::error::InvoiceError::Validation(format!("malformed invoice payload: {e}"))
        })
    }
}
