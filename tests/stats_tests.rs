#![cfg(feature = "stats")]

use chrono::NaiveDate;
use gst_invoice::core::*;
use gst_invoice::stats::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn invoice(day: u32, client: Client, rate: Decimal, tax_type: TaxType, invoice_type: InvoiceType) -> Invoice {
    InvoiceBuilder::new(NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
        .invoice_type(invoice_type)
        .tax(tax_type, dec!(18))
        .client(client)
        .add_item(LineItemBuilder::new("Steel", dec!(1), rate).build())
        .build()
        .unwrap()
}

fn sharma(name: &str) -> Client {
    ClientBuilder::new(name).gstin("27AAPFU0939F1ZV").build()
}

fn ledger() -> Vec<Invoice> {
    vec![
        // 100 + 18 = 118
        invoice(1, sharma("Sharma Traders"), dec!(100), TaxType::CgstSgst, InvoiceType::Tax),
        // 1000 + 180 = 1180
        invoice(2, ClientBuilder::new("patel metals ").build(), dec!(1000), TaxType::Igst, InvoiceType::Tax),
        // 50 + 9 = 59
        invoice(3, sharma("Sharma Traders Pvt Ltd"), dec!(50), TaxType::CgstSgst, InvoiceType::Proforma),
        // 10.5 + 1.89 = 12.39 -> 12
        invoice(4, ClientBuilder::new("Patel Metals").build(), dec!(10.5), TaxType::Igst, InvoiceType::Tax),
        // 200 + 36 = 236
        invoice(5, ClientBuilder::new("Gupta Hardware").build(), dec!(200), TaxType::CgstSgst, InvoiceType::Tax),
    ]
}

#[test]
fn summary_figures() {
    let stats = summarize(&ledger());

    assert_eq!(stats.total_invoices, 5);
    assert_eq!(stats.total_revenue, dec!(1605));
    assert_eq!(stats.average_invoice_value, dec!(321));
    assert_eq!(stats.by_invoice_type["TAX"], 4);
    assert_eq!(stats.by_invoice_type["PROFORMA"], 1);
    assert_eq!(stats.by_tax_type["CGST_SGST"], 3);
    assert_eq!(stats.by_tax_type["IGST"], 2);
}

#[test]
fn empty_ledger_has_zero_average() {
    let stats = summarize(&[]);
    assert_eq!(stats.total_invoices, 0);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.average_invoice_value, Decimal::ZERO);
    assert!(stats.by_invoice_type.is_empty());
}

#[test]
fn average_rounds_to_paise() {
    let ledger = ledger();
    let stats = summarize(&ledger[..3]);
    // (118 + 1180 + 59) / 3 = 452.333...
    assert_eq!(stats.average_invoice_value, dec!(452.33));
}

#[test]
fn top_clients_grouped_and_ranked() {
    let top = top_clients(&ledger(), 10);
    let names: Vec<_> = top.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Patel Metals", "Sharma Traders Pvt Ltd", "Gupta Hardware"]);
    assert_eq!(top[0].invoice_count, 2);
    assert_eq!(top[0].revenue, dec!(1192));
    assert_eq!(top[0].gstin, None);
    assert_eq!(top[1].gstin.as_deref(), Some("27AAPFU0939F1ZV"));
    assert_eq!(top[1].revenue, dec!(177));
}

#[test]
fn top_clients_respects_limit() {
    assert_eq!(top_clients(&ledger(), 1).len(), 1);
    assert!(top_clients(&ledger(), 0).is_empty());
}

#[test]
fn stats_serialize_camel_case() {
    let value = serde_json::to_value(summarize(&ledger())).unwrap();
    assert_eq!(value["totalInvoices"], 5);
    assert_eq!(value["byTaxType"]["IGST"], 2);
}

#[test]
fn huge_snapshots_saturate() {
    let mut invoices = ledger();
    invoices.truncate(2);
    for inv in &mut invoices {
        inv.details.client = sharma("Sharma Traders");
        inv.totals.rounded_total = Decimal::MAX;
    }

    let stats = summarize(&invoices);
    assert_eq!(stats.total_revenue, Decimal::MAX);
    assert_eq!(stats.total_invoices, 2);

    let top = top_clients(&invoices, 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].revenue, Decimal::MAX);
    assert_eq!(top[0].invoice_count, 2);
}
