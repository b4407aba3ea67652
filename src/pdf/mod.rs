//! PDF rendering of an [`InvoiceDocument`].
//!
//! Produces A4 pages using the standard Helvetica fonts, so no font files
//! are embedded. Text is encoded as WinAnsi; characters outside Latin-1 are
//! replaced with `?`.
//!
//! # Example
//!
//! ```
//! use gst_invoice::core::*;
//! use gst_invoice::document::*;
//! use gst_invoice::pdf::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .client(ClientBuilder::new("Sharma Traders").build())
//!     .add_item(LineItemBuilder::new("TMT bar", dec!(2), dec!(100)).build())
//!     .build()
//!     .unwrap();
//! let doc = InvoiceDocument::assemble(&invoice, &Profile::default(), &DocumentOptions::default());
//!
//! let bytes = render_pdf(&doc, &PdfOptions::default()).unwrap();
//! assert!(bytes.starts_with(b"%PDF-"));
//! ```

mod layout;

use lopdf::content::Content;
use lopdf::{Document, Object, Stream, dictionary};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::InvoiceError;
use crate::document::InvoiceDocument;

use layout::PageWriter;

/// A4 width in points.
pub const A4_WIDTH: i64 = 595;
/// A4 height in points.
pub const A4_HEIGHT: i64 = 842;
/// Largest accepted font size or line height, in points.
pub const MAX_TYPE_SIZE: i64 = 144;

/// Page geometry and type sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Body font size in points.
    pub font_size: i64,
    /// Title font size in points.
    pub title_size: i64,
    /// Margin on every side, in points.
    pub margin: i64,
    /// Distance between baselines, in points.
    pub line_height: i64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            font_size: 9,
            title_size: 14,
            margin: 20,
            line_height: 11,
        }
    }
}

/// Render `document` to PDF bytes.
pub fn render_pdf(document: &InvoiceDocument, options: &PdfOptions) -> Result<Vec<u8>, InvoiceError> {
    let sizes = 1..=MAX_TYPE_SIZE;
    if !(0..A4_WIDTH / 2).contains(&options.margin)
        || !sizes.contains(&options.line_height)
        || !sizes.contains(&options.font_size)
        || !sizes.contains(&options.title_size)
    {
        return Err(InvoiceError::Render(format!(
            "unusable page geometry: margin {} line height {} font size {} title size {}",
            options.margin, options.line_height, options.font_size, options.title_size
        )));
    }

    let mut writer = PageWriter::new(options);
    writer.write_document(document);
    let pages = writer.finish();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| InvoiceError::Render(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }
    let page_count = kids.len() as i64;
    trace!(pages = page_count, "pdf pages encoded");

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(A4_WIDTH),
            Object::Integer(A4_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(layout::to_win_ansi(&document.title)),
        "Producer" => Object::string_literal("gst-invoice"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| InvoiceError::Render(format!("failed to save PDF: {e}")))?;

    debug!(pages = page_count, bytes = output.len(), "invoice PDF rendered");
    Ok(output)
}
