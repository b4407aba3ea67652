use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calc::{round_total, try_compute_totals};
use super::error::ValidationError;
use super::gstin::validate_gstin_format;
use super::types::*;

/// Validate the form fields of an invoice before totals are computed.
/// Returns all validation errors found (not just the first).
pub fn validate_details(details: &InvoiceDetails) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_tax_rate(details.tax_rate, "tax_rate", &mut errors);
    validate_client(&details.client, &mut errors);

    if details.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    for (i, item) in details.items.iter().enumerate() {
        validate_line(item, i, &mut errors);
    }

    errors
}

/// Validate a tax configuration on its own (rate within 0–100 %).
pub fn validate_tax_config(config: &TaxConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_tax_rate(config.rate_percent, "rate_percent", &mut errors);
    errors
}

/// Check a stored totals snapshot against the invoice it belongs to.
///
/// Recomputes the expected figures from the items and reports every
/// mismatch. The snapshot itself is never modified. Figures too large to
/// recompute are reported instead of panicking.
pub fn validate_totals(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let totals = &invoice.totals;
    let details = &invoice.details;

    match try_compute_totals(&details.items, details.tax_type, details.tax_rate) {
        Ok(expected) if totals.subtotal != expected.subtotal => {
            errors.push(ValidationError::new(
                "totals.subtotal",
                format!(
                    "subtotal {} does not match sum of line amounts {}",
                    totals.subtotal, expected.subtotal
                ),
            ));
        }
        Ok(_) => {}
        Err(e) => {
            errors.push(ValidationError::new("items", e.to_string()));
            return errors;
        }
    }

    // Components are checked against the stored subtotal so that a single
    // wrong figure is reported once.
    let divisor = match details.tax_type {
        TaxType::CgstSgst => dec!(200),
        TaxType::Igst => dec!(100),
    };
    let Some(expected_component) = totals
        .subtotal
        .checked_mul(details.tax_rate)
        .map(|taxed| taxed / divisor)
    else {
        errors.push(ValidationError::new(
            "totals.subtotal",
            "stored subtotal is too large to recompute tax",
        ));
        return errors;
    };

    match details.tax_type {
        TaxType::CgstSgst => {
            let expected = expected_component;
            for (field, actual) in [
                ("totals.cgst", totals.component_a),
                ("totals.sgst", totals.component_b),
            ] {
                if actual != expected {
                    errors.push(ValidationError::new(
                        field,
                        format!("{actual} does not match subtotal x half rate {expected}"),
                    ));
                }
            }
        }
        TaxType::Igst => {
            let expected = expected_component;
            if totals.component_a != expected {
                errors.push(ValidationError::new(
                    "totals.igst",
                    format!(
                        "{} does not match subtotal x rate {expected}",
                        totals.component_a
                    ),
                ));
            }
            if !totals.component_b.is_zero() {
                errors.push(ValidationError::new(
                    "totals.component_b",
                    "second tax component must be zero under IGST",
                ));
            }
        }
    }

    let expected_total = totals
        .subtotal
        .checked_add(totals.component_a)
        .and_then(|t| t.checked_add(totals.component_b));
    if expected_total != Some(totals.total) {
        errors.push(ValidationError::new(
            "totals.total",
            format!(
                "total {} does not match subtotal {} + components {} and {}",
                totals.total, totals.subtotal, totals.component_a, totals.component_b
            ),
        ));
    }

    if totals.rounded_total != round_total(totals.total) {
        errors.push(ValidationError::new(
            "totals.rounded_total",
            format!(
                "rounded total {} is not total {} rounded to whole rupees",
                totals.rounded_total, totals.total
            ),
        ));
    }

    errors
}

fn validate_tax_rate(rate: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if rate.is_sign_negative() && !rate.is_zero() {
        errors.push(ValidationError::new(field, "tax rate must not be negative"));
    } else if rate > dec!(100) {
        errors.push(ValidationError::new(field, "tax rate must not exceed 100%"));
    }
}

fn validate_client(client: &Client, errors: &mut Vec<ValidationError>) {
    if client.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "client.name",
            "client name must not be empty",
        ));
    }

    if let Some(gstin) = client.gstin.as_deref().filter(|g| !g.trim().is_empty()) {
        if let Err(e) = validate_gstin_format(gstin) {
            errors.push(ValidationError::new("client.gstin", e.reason));
        }
    }
}

fn validate_line(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "description must not be empty",
        ));
    }

    if item.quantity < Decimal::ONE {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be at least 1",
        ));
    }

    if item.rate.is_sign_negative() && !item.rate.is_zero() {
        errors.push(ValidationError::new(
            format!("{prefix}.rate"),
            "rate must not be negative",
        ));
    }
}
