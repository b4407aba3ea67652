use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use gst_invoice::core::*;
use gst_invoice::document::{DocumentOptions, InvoiceDocument};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|i| {
            LineItemBuilder::new(format!("Item {i}"), dec!(2), dec!(9.99))
                .hsn_code("7214")
                .build()
        })
        .collect()
}

fn build_invoice(count: usize) -> Invoice {
    InvoiceBuilder::new(test_date())
        .number("INV-BENCH")
        .tax(TaxType::CgstSgst, dec!(18))
        .client(
            ClientBuilder::new("Sharma Traders")
                .gstin("27AAPFU0939F1ZV")
                .city("Pune")
                .state("Maharashtra")
                .pincode("411001")
                .build(),
        )
        .items(items(count))
        .build()
        .unwrap()
}

fn bench_compute_totals(c: &mut Criterion) {
    let ten = items(10);
    let thousand = items(1000);
    c.bench_function("compute_totals_10_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(&ten), TaxType::CgstSgst, dec!(18))));
    });
    c.bench_function("compute_totals_1000_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(&thousand), TaxType::Igst, dec!(18))));
    });
}

fn bench_build_invoice(c: &mut Criterion) {
    c.bench_function("build_invoice_10_lines", |b| {
        b.iter(|| black_box(build_invoice(10)));
    });
}

fn bench_assemble_document(c: &mut Criterion) {
    let invoice = build_invoice(50);
    let profile = Profile::default();
    let options = DocumentOptions::default();
    c.bench_function("assemble_document_50_lines", |b| {
        b.iter(|| {
            black_box(InvoiceDocument::assemble(
                black_box(&invoice),
                black_box(&profile),
                &options,
            ))
        });
    });
}

fn bench_gstin(c: &mut Criterion) {
    c.bench_function("validate_gstin_format", |b| {
        b.iter(|| black_box(validate_gstin_format(black_box("27AAPFU0939F1ZV"))));
    });
}

criterion_group!(
    benches,
    bench_compute_totals,
    bench_build_invoice,
    bench_assemble_document,
    bench_gstin,
);
criterion_main!(benches);
