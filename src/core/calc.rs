//! GST computation engine.
//!
//! Every function here is pure: no I/O, no logging, no mutation of inputs.
//! Callers recompute totals from scratch whenever items or the tax
//! configuration change.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::InvoiceError;
use super::types::*;

/// `quantity * rate` for a single line.
///
/// No validation happens here; zero or negative operands are accepted.
pub fn line_amount(item: &LineItem) -> Decimal {
    item.quantity * item.rate
}

/// Compute subtotal, tax components, total and rounded total.
///
/// - subtotal is the sum of [`line_amount`] over all items (0 for none).
/// - [`TaxType::CgstSgst`]: both components are `subtotal * rate / 200`.
/// - [`TaxType::Igst`]: component A is `subtotal * rate / 100`, B is 0.
/// - rounded total is the total rounded to whole rupees, ties away from zero.
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItemBuilder::new("Steel rod", dec!(2), dec!(100)).build(),
///     LineItemBuilder::new("Angle bar", dec!(1), dec!(250)).build(),
/// ];
/// let totals = compute_totals(&items, TaxType::CgstSgst, dec!(18));
/// assert_eq!(totals.subtotal, dec!(450));
/// assert_eq!(totals.component_a, dec!(40.50));
/// assert_eq!(totals.rounded_total, dec!(531));
/// ```
pub fn compute_totals(items: &[LineItem], tax_type: TaxType, rate_percent: Decimal) -> InvoiceTotals {
    let subtotal: Decimal = items.iter().map(line_amount).sum();

    let (component_a, component_b) = match tax_type {
        TaxType::CgstSgst => {
            let half = subtotal * rate_percent / dec!(200);
            (half, half)
        }
        TaxType::Igst => (subtotal * rate_percent / dec!(100), Decimal::ZERO),
    };

    let total = subtotal + component_a + component_b;

    InvoiceTotals {
        subtotal,
        component_a,
        component_b,
        total,
        rounded_total: round_total(total),
    }
}

/// Same as [`compute_totals`] but reports decimal overflow as
/// [`InvoiceError::Arithmetic`] instead of panicking.
pub fn try_compute_totals(
    items: &[LineItem],
    tax_type: TaxType,
    rate_percent: Decimal,
) -> Result<InvoiceTotals, InvoiceError> {
    let overflow = |what: &str| InvoiceError::Arithmetic(format!("{what} overflowed"));

    let mut subtotal = Decimal::ZERO;
    for (i, item) in items.iter().enumerate() {
        let amount = item
            .quantity
            .checked_mul(item.rate)
            .ok_or_else(|| overflow(&format!("items[{i}] amount")))?;
        subtotal = subtotal
            .checked_add(amount)
            .ok_or_else(|| overflow("subtotal"))?;
    }

    let taxed = subtotal
        .checked_mul(rate_percent)
        .ok_or_else(|| overflow("tax"))?;
    let (component_a, component_b) = match tax_type {
        TaxType::CgstSgst => {
            let half = taxed / dec!(200);
            (half, half)
        }
        TaxType::Igst => (taxed / dec!(100), Decimal::ZERO),
    };

    let total = subtotal
        .checked_add(component_a)
        .and_then(|t| t.checked_add(component_b))
        .ok_or_else(|| overflow("total"))?;

    Ok(InvoiceTotals {
        subtotal,
        component_a,
        component_b,
        total,
        rounded_total: round_total(total),
    })
}

/// GST on a single line at the full nominal rate.
///
/// The full rate applies regardless of [`TaxType`]; under CGST+SGST the
/// per-line figure is therefore the combined tax, not either half.
pub fn item_gst(item: &LineItem, rate_percent: Decimal) -> Decimal {
    line_amount(item) * rate_percent / dec!(100)
}

/// Line amount plus [`item_gst`].
pub fn item_final_amount(item: &LineItem, rate_percent: Decimal) -> Decimal {
    line_amount(item) + item_gst(item, rate_percent)
}

/// All per-line figures for the itemized GST column.
pub fn line_breakdown(item: &LineItem, rate_percent: Decimal) -> LineBreakdown {
    let amount = line_amount(item);
    let gst = amount * rate_percent / dec!(100);
    LineBreakdown {
        amount,
        gst,
        final_amount: amount + gst,
    }
}

/// Checked [`line_breakdown`]: `None` when a figure exceeds the decimal range.
pub fn try_line_breakdown(item: &LineItem, rate_percent: Decimal) -> Option<LineBreakdown> {
    let amount = item.quantity.checked_mul(item.rate)?;
    let gst = amount.checked_mul(rate_percent)? / dec!(100);
    Some(LineBreakdown {
        amount,
        gst,
        final_amount: amount.checked_add(gst)?,
    })
}

/// Round to whole rupees, ties away from zero.
pub fn round_total(total: Decimal) -> Decimal {
    total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

impl TaxConfig {
    /// Totals for `items` under this configuration.
    pub fn totals(&self, items: &[LineItem]) -> InvoiceTotals {
        compute_totals(items, self.tax_type, self.rate_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Decimal, rate: Decimal) -> LineItem {
        LineItem {
            description: "Item".into(),
            hsn_code: None,
            quantity,
            rate,
        }
    }

    fn sample() -> Vec<LineItem> {
        vec![item(dec!(2), dec!(100)), item(dec!(1), dec!(250))]
    }

    #[test]
    fn split_halves_the_rate() {
        let t = compute_totals(&sample(), TaxType::CgstSgst, dec!(18));
        assert_eq!(t.subtotal, dec!(450.00));
        assert_eq!(t.component_a, dec!(40.50));
        assert_eq!(t.component_b, dec!(40.50));
        assert_eq!(t.total, dec!(531.00));
        assert_eq!(t.rounded_total, dec!(531));
    }

    #[test]
    fn single_uses_full_rate() {
        let t = compute_totals(&sample(), TaxType::Igst, dec!(18));
        assert_eq!(t.subtotal, dec!(450.00));
        assert_eq!(t.component_a, dec!(81.00));
        assert_eq!(t.component_b, Decimal::ZERO);
        assert_eq!(t.total, dec!(531.00));
        assert_eq!(t.rounded_total, dec!(531));
    }

    #[test]
    fn fractional_rates_are_exact() {
        let t = compute_totals(&[item(dec!(3), dec!(33.33))], TaxType::CgstSgst, dec!(12));
        assert_eq!(t.subtotal, dec!(99.99));
        assert_eq!(t.component_a, dec!(5.9994));
        assert_eq!(t.component_b, dec!(5.9994));
        assert_eq!(t.total, dec!(111.9888));
        assert_eq!(t.rounded_total, dec!(112));
    }

    #[test]
    fn empty_items_yield_zero() {
        for tax_type in [TaxType::CgstSgst, TaxType::Igst] {
            assert_eq!(compute_totals(&[], tax_type, dec!(28)), InvoiceTotals::ZERO);
        }
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_total(dec!(1499.5)), dec!(1500));
        assert_eq!(round_total(dec!(1499.4)), dec!(1499));
        assert_eq!(round_total(dec!(-2.5)), dec!(-3));
        assert_eq!(round_total(dec!(0.5)), dec!(1));
    }

    #[test]
    fn per_line_gst_ignores_split() {
        let line = item(dec!(2), dec!(100));
        assert_eq!(item_gst(&line, dec!(18)), dec!(36));
        assert_eq!(item_final_amount(&line, dec!(18)), dec!(236));
        let b = line_breakdown(&line, dec!(18));
        assert_eq!(b.amount, dec!(200));
        assert_eq!(b.gst, dec!(36));
        assert_eq!(b.final_amount, dec!(236));
    }

    #[test]
    fn zero_and_negative_operands_pass_through() {
        assert_eq!(line_amount(&item(dec!(0), dec!(10))), Decimal::ZERO);
        assert_eq!(line_amount(&item(dec!(-2), dec!(10))), dec!(-20));
    }

    #[test]
    fn checked_matches_unchecked() {
        let a = compute_totals(&sample(), TaxType::Igst, dec!(5));
        let b = try_compute_totals(&sample(), TaxType::Igst, dec!(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn checked_reports_overflow() {
        let huge = item(Decimal::MAX, dec!(2));
        let err = try_compute_totals(&[huge], TaxType::CgstSgst, dec!(18)).unwrap_err();
        assert!(matches!(err, InvoiceError::Arithmetic(_)));
        assert!(err.to_string().contains("items[0]"));
    }

    #[test]
    fn checked_breakdown() {
        let line = item(dec!(2), dec!(100));
        assert_eq!(try_line_breakdown(&line, dec!(18)), Some(line_breakdown(&line, dec!(18))));
        assert_eq!(try_line_breakdown(&item(Decimal::MAX, dec!(2)), dec!(18)), None);
        assert_eq!(try_line_breakdown(&item(Decimal::MAX, dec!(1)), dec!(18)), None);
    }

    #[test]
    fn config_default_is_split_18() {
        let t = TaxConfig::default().totals(&sample());
        assert_eq!(t, compute_totals(&sample(), TaxType::CgstSgst, dec!(18)));
    }
}
