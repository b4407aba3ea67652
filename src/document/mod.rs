//! Printable invoice document.
//!
//! [`InvoiceDocument::assemble`] turns an [`Invoice`] and the seller's
//! [`Profile`] into a fully-populated value with every section of the
//! printed page already formatted. Renderers (plain text here, PDF in the
//! `pdf` module) only lay out strings; they never look at optional data.
//!
//! # Example
//!
//! ```
//! use gst_invoice::core::*;
//! use gst_invoice::document::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .number("INV-042")
//!     .client(ClientBuilder::new("Sharma Traders").build())
//!     .add_item(LineItemBuilder::new("TMT bar", dec!(2), dec!(100)).build())
//!     .build()
//!     .unwrap();
//!
//! let doc = InvoiceDocument::assemble(&invoice, &Profile::default(), &DocumentOptions::default());
//! assert_eq!(doc.title, "TAX INVOICE");
//! assert_eq!(doc.rows[0].gst, "36.00");
//! assert!(doc.to_text().contains("Two Hundred Thirty Six rupees only"));
//! ```

mod text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::*;

/// Column headings of the item table, left to right.
pub const ITEM_COLUMNS: [&str; 7] = [
    "Sl. No.",
    "Item Description",
    "HSN Code",
    "Units",
    "Basic Price",
    "GST",
    "Amount",
];

/// Relative column widths of the item table.
pub const ITEM_COLUMN_WEIGHTS: [f32; 7] = [0.5, 3.0, 1.0, 1.0, 1.0, 1.0, 1.0];

/// Fixed texts of the printed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Label above the title.
    pub copy_label: String,
    /// Number printed when the invoice has not been numbered yet.
    pub default_number: String,
    pub payment_mode: String,
    pub notes: String,
    /// Title under the signature line.
    pub signatory: String,
    /// Blank rows printed when the invoice has no items.
    pub blank_rows: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            copy_label: "Original/Duplicate/Triplicate".into(),
            default_number: "INV-001".into(),
            payment_mode: "NEFT/RTGS".into(),
            notes: "Thank you for your business!".into(),
            signatory: "Proprietor".into(),
            blank_rows: 5,
        }
    }
}

/// A headed block of text lines (consignor, bill-to, bank details, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub heading: String,
    pub lines: Vec<String>,
}

/// One row of the item table. Blank rows have every cell empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub serial: String,
    pub description: String,
    pub hsn_code: String,
    pub quantity: String,
    pub rate: String,
    pub gst: String,
    pub amount: String,
}

impl ItemRow {
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.serial,
            &self.description,
            &self.hsn_code,
            &self.quantity,
            &self.rate,
            &self.gst,
            &self.amount,
        ]
    }
}

/// A fully-populated printable invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub title: String,
    pub copy_label: String,
    pub logo_url: Option<String>,
    pub consignor: Block,
    /// Number, date and (for tax invoices) transport details.
    pub invoice_info: Vec<String>,
    pub bill_to: Block,
    pub ship_to: Option<Block>,
    pub bank: Block,
    pub rows: Vec<ItemRow>,
    pub totals: Vec<SummaryRow>,
    pub amount_in_words: String,
    pub notes: Block,
    pub terms: Block,
    /// "For {company}" followed by the signatory title.
    pub signature: Vec<String>,
}

impl InvoiceDocument {
    /// Lay out `invoice` for printing.
    ///
    /// Totals come from the invoice's stored snapshot. The per-line GST
    /// column is computed at the full nominal rate for every tax type; a
    /// line whose figures exceed the decimal range prints `-` in both
    /// amount columns.
    pub fn assemble(invoice: &Invoice, profile: &Profile, options: &DocumentOptions) -> Self {
        let details = &invoice.details;
        let is_tax = details.invoice_type == InvoiceType::Tax;
        let number = invoice
            .number
            .clone()
            .unwrap_or_else(|| options.default_number.clone());

        let consignor = Block {
            heading: "Consignor:".into(),
            lines: vec![
                profile.company.clone(),
                profile.address.clone(),
                place_line(&profile.city, &profile.state, &profile.pincode),
                format!("Ph: {}", profile.phone),
                format!("Mob: {}", profile.mobile),
                format!("GSTIN: {}", profile.gstin),
            ],
        };

        let mut invoice_info = vec![
            format!("Invoice Number: {number}"),
            format!("Date: {}", details.invoice_date.format("%-d/%-m/%Y")),
        ];
        if is_tax {
            invoice_info.push(format!("PO NO: {}", or_dash(&details.po_number)));
            invoice_info.push(format!(
                "Vehicle Number: {}",
                or_dash(&details.vehicle_number)
            ));
            invoice_info.push(format!("Transporter: {}", or_dash(&details.transporter)));
            invoice_info.push(format!("No. of Bundles: {}", details.bundle_count));
        }

        let client = &details.client;
        let bill_to = Block {
            heading: "Consignee - Bill To:".into(),
            lines: vec![
                client.name.clone(),
                client.address.clone(),
                place_line(&client.city, &client.state, &client.pincode),
                format!("Client GSTIN: {}", or_dash(&client.gstin)),
            ],
        };

        let ship_to = (is_tax && client.has_shipping()).then(|| Block {
            heading: "Consignee - Ship To:".into(),
            lines: vec![
                fallback(&client.shipping_name, &client.name),
                fallback(&client.shipping_address, &client.address),
                place_line(
                    &fallback(&client.shipping_city, &client.city),
                    &fallback(&client.shipping_state, &client.state),
                    &fallback(&client.shipping_pincode, &client.pincode),
                ),
            ],
        });

        let bank = Block {
            heading: "Bank Details".into(),
            lines: vec![
                format!("Mode of Payment - {}", options.payment_mode),
                format!("Bank Name: {}", profile.bank.bank_name),
                format!("Branch: {}", profile.bank.branch),
                format!("Account No: {}", profile.bank.account_no),
                format!("IFSC Code: {}", profile.bank.ifsc_code),
            ],
        };

        let rows = if details.items.is_empty() {
            vec![ItemRow::default(); options.blank_rows]
        } else {
            details
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let (gst, amount) = match try_line_breakdown(item, details.tax_rate) {
                        Some(line) => (format_amount(line.gst), format_amount(line.final_amount)),
                        None => {
                            debug!(row = i, "line figures out of range");
                            ("-".into(), "-".into())
                        }
                    };
                    ItemRow {
                        serial: (i + 1).to_string(),
                        description: item.description.clone(),
                        hsn_code: item.hsn_code.clone().unwrap_or_default(),
                        quantity: item.quantity.normalize().to_string(),
                        rate: format_amount(item.rate),
                        gst,
                        amount,
                    }
                })
                .collect()
        };

        let totals = totals_rows(&invoice.totals, details.tax_type, details.tax_rate);

        debug!(
            number = %number,
            rows = rows.len(),
            ship_to = ship_to.is_some(),
            "invoice document assembled"
        );

        InvoiceDocument {
            title: details.invoice_type.title().into(),
            copy_label: options.copy_label.clone(),
            logo_url: profile.logo_url.clone(),
            consignor,
            invoice_info,
            bill_to,
            ship_to,
            bank,
            rows,
            totals,
            amount_in_words: format!(
                "{} rupees only",
                amount_in_words(invoice.totals.rounded_total)
            ),
            notes: Block {
                heading: "Notes:".into(),
                lines: vec![options.notes.clone()],
            },
            terms: Block {
                heading: "Terms and Conditions".into(),
                lines: profile.terms.lines().map(String::from).collect(),
            },
            signature: vec![
                format!("For {}", profile.company),
                options.signatory.clone(),
            ],
        }
    }
}

/// Totals block of the printed page. Amounts carry no currency glyph.
fn totals_rows(
    totals: &InvoiceTotals,
    tax_type: TaxType,
    rate_percent: rust_decimal::Decimal,
) -> Vec<SummaryRow> {
    let label = rate_label(tax_type, rate_percent);
    let row = |label: String, value: String| SummaryRow { label, value };

    let mut rows = vec![row("Taxable Amt:".into(), format_amount(totals.subtotal))];
    match tax_type {
        TaxType::CgstSgst => {
            rows.push(row(
                format!("CGST @ {label}:"),
                format_amount(totals.component_a),
            ));
            rows.push(row(
                format!("SGST @ {label}:"),
                format_amount(totals.component_b),
            ));
        }
        TaxType::Igst => rows.push(row(
            format!("IGST @ {label}:"),
            format_amount(totals.component_a),
        )),
    }
    rows.push(row("Total:".into(), format_amount(totals.total)));
    rows.push(row(
        "Rounded Off:".into(),
        round_total(totals.rounded_total).trunc().to_string(),
    ));
    rows
}

fn place_line(city: &str, state: &str, pincode: &str) -> String {
    format!("{city}, {state} - {pincode}")
}

fn or_dash(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

fn fallback(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
