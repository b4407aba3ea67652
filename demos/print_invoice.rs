use chrono::NaiveDate;
use gst_invoice::core::*;
use gst_invoice::document::{DocumentOptions, InvoiceDocument};
use gst_invoice::pdf::{PdfOptions, render_pdf};
use rust_decimal_macros::dec;

fn main() {
    let profile = ProfileDraft {
        company: Some("Shree Steel Works".into()),
        gstin: Some("27AAPFU0939F1ZV".into()),
        address: Some("Plot 14, MIDC Bhosari".into()),
        city: Some("Pune".into()),
        state: Some("Maharashtra".into()),
        pincode: Some("411026".into()),
        ..ProfileDraft::default()
    }
    .resolve();

    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("profile: {e}");
        }
        std::process::exit(1);
    }

    let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .tax(TaxType::CgstSgst, dec!(18))
        .client(
            ClientBuilder::new("Patel Metals")
                .gstin("27AAGCB7383J1Z8")
                .address("8 Market Yard")
                .city("Pune")
                .state("Maharashtra")
                .pincode("411037")
                .ship_to("Patel Metals Godown", "Gate 3, Chakan MIDC", "Chakan", "Maharashtra", "410501")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("MS angle 40x40x5", dec!(12), dec!(1320))
                .hsn_code("7216")
                .build(),
        )
        .build()
        .expect("invoice should be valid");

    let doc = InvoiceDocument::assemble(&invoice, &profile, &DocumentOptions::default());
    println!("{}", doc.to_text());

    let pdf = render_pdf(&doc, &PdfOptions::default()).expect("PDF rendering failed");
    let path = std::env::temp_dir().join("gst-invoice-demo.pdf");
    std::fs::write(&path, &pdf).expect("failed to write PDF");
    println!("Wrote {} bytes to {}", pdf.len(), path.display());
}
