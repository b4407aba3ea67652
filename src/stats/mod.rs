//! Dashboard aggregates over issued invoices.
//!
//! Revenue figures use each invoice's stored rounded total, so the numbers
//! match what was printed on the documents. Sums saturate at the decimal
//! range instead of panicking on corrupt snapshots.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::trace;

use crate::core::Invoice;

/// Summary figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invoices: usize,
    /// Sum of rounded totals.
    pub total_revenue: Decimal,
    /// Revenue per invoice, two decimals; zero when there are no invoices.
    pub average_invoice_value: Decimal,
    /// Invoice count per invoice type code ("TAX", "PROFORMA").
    pub by_invoice_type: BTreeMap<String, usize>,
    /// Invoice count per tax type code ("CGST_SGST", "IGST").
    pub by_tax_type: BTreeMap<String, usize>,
}

/// One entry of the top-clients list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub name: String,
    pub gstin: Option<String>,
    pub invoice_count: usize,
    pub revenue: Decimal,
}

/// Aggregate `invoices` into dashboard figures.
pub fn summarize(invoices: &[Invoice]) -> DashboardStats {
    let total_revenue = invoices
        .iter()
        .fold(Decimal::ZERO, |sum, i| sum.saturating_add(i.totals.rounded_total));
    let average_invoice_value = if invoices.is_empty() {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(invoices.len()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let mut by_invoice_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_tax_type: BTreeMap<String, usize> = BTreeMap::new();
    for invoice in invoices {
        *by_invoice_type
            .entry(invoice.details.invoice_type.code().to_string())
            .or_default() += 1;
        *by_tax_type
            .entry(invoice.details.tax_type.code().to_string())
            .or_default() += 1;
    }

    trace!(invoices = invoices.len(), %total_revenue, "dashboard stats computed");

    DashboardStats {
        total_invoices: invoices.len(),
        total_revenue,
        average_invoice_value,
        by_invoice_type,
        by_tax_type,
    }
}

/// Clients ranked by number of invoices, then by revenue, then by name.
///
/// Invoices are grouped by client GSTIN when one is present, otherwise by
/// the case-insensitive client name. The displayed name is the one from the
/// most recent invoice of the group.
pub fn top_clients(invoices: &[Invoice], limit: usize) -> Vec<ClientSummary> {
    let mut groups: HashMap<String, (ClientSummary, chrono::NaiveDate)> = HashMap::new();

    for invoice in invoices {
        let client = &invoice.details.client;
        let gstin = client
            .gstin
            .as_deref()
            .map(|g| g.trim().to_ascii_uppercase())
            .filter(|g| !g.is_empty());
        let key = match &gstin {
            Some(g) => format!("gstin:{g}"),
            None => format!("name:{}", client.name.trim().to_lowercase()),
        };
        let date = invoice.details.invoice_date;

        let (summary, latest) = groups.entry(key).or_insert_with(|| {
            (
                ClientSummary {
                    name: client.name.clone(),
                    gstin: gstin.clone(),
                    invoice_count: 0,
                    revenue: Decimal::ZERO,
                },
                date,
            )
        });
        summary.invoice_count += 1;
        summary.revenue = summary.revenue.saturating_add(invoice.totals.rounded_total);
        if date > *latest {
            *latest = date;
            summary.name = client.name.clone();
        }
    }

    let mut ranked: Vec<ClientSummary> = groups.into_values().map(|(s, _)| s).collect();
    ranked.sort_by(|a, b| {
        b.invoice_count
            .cmp(&a.invoice_count)
            .then(b.revenue.cmp(&a.revenue))
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}
