use chrono::NaiveDate;
use gst_invoice::core::*;
use rust_decimal_macros::dec;

fn main() {
    let seller_gstin = "27AAPFU0939F1ZV";
    let client = ClientBuilder::new("Sharma Traders")
        .gstin("29AAGCB7383J1Z4")
        .address("44 Residency Road")
        .city("Bengaluru")
        .state("Karnataka")
        .pincode("560025")
        .build();

    // Pune seller, Bengaluru buyer: inter-state supply
    let tax_type = determine_tax_type(seller_gstin, &client).unwrap_or_default();

    let invoice = InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .number("INV-2024-001")
        .tax(tax_type, dec!(18))
        .po_number("PO-5521")
        .vehicle_number("MH12AB1234")
        .transporter("VRL Logistics")
        .bundle_count(6)
        .client(client)
        .add_item(
            LineItemBuilder::new("TMT bar 8mm", dec!(20), dec!(545.50))
                .hsn_code("7214")
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Binding wire 18 gauge", dec!(4), dec!(82))
                .hsn_code("7217")
                .build(),
        )
        .build()
        .expect("invoice should be valid");

    let details = &invoice.details;
    println!("Invoice: {}", invoice.number.as_deref().unwrap_or("-"));
    println!("Date:    {}", details.invoice_date);
    println!("Client:  {}", details.client.name);
    println!("Tax:     {} @ {}%", details.tax_type.code(), details.tax_rate);
    println!("---");
    for item in &details.items {
        let line = line_breakdown(item, details.tax_rate);
        println!(
            "  {} x {} @ {} = {} (+ GST {})",
            item.quantity,
            item.description,
            format_inr(item.rate),
            format_inr(line.amount),
            format_inr(line.gst)
        );
    }
    println!("---");
    for row in summary_rows(&invoice.totals, details.tax_type, details.tax_rate) {
        println!("{:<14} {:>14}", row.label, row.value);
    }
    println!(
        "In words: {} rupees only",
        amount_in_words(invoice.totals.rounded_total)
    );
}
