//! # gst-invoice
//!
//! GST invoice computation for Indian invoicing: CGST/SGST/IGST totals,
//! form validation, GSTIN checks, printable invoice documents, PDF output,
//! and dashboard aggregates.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The totals engine ([`core::compute_totals`]) is a pure function that
//! callers run again on every change to items or tax configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gst_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .tax(TaxType::CgstSgst, dec!(18))
//!     .client(ClientBuilder::new("Sharma Traders").gstin("27AAPFU0939F1ZV").build())
//!     .add_item(LineItemBuilder::new("TMT bar 12mm", dec!(2), dec!(100)).hsn_code("7214").build())
//!     .add_item(LineItemBuilder::new("Binding wire", dec!(1), dec!(250)).hsn_code("7217").build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.totals.subtotal, dec!(450.00));
//! assert_eq!(invoice.totals.cgst(TaxType::CgstSgst), dec!(40.50));
//! assert_eq!(invoice.totals.rounded_total, dec!(531));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals engine, validation, GSTIN, formatting |
//! | `document` | Printable invoice document with defaults applied |
//! | `pdf` | A4 PDF rendering of the document |
//! | `stats` | Dashboard aggregates and top clients |
//! | `json` | JSON encoding of the backend payload |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "stats")]
pub mod stats;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
