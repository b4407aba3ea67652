//! Display formatting for amounts, rates and totals summaries.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::types::{InvoiceTotals, TaxType};

/// Rupee glyph used as currency prefix.
pub const RUPEE: &str = "₹";

/// Two decimal places, ties away from zero: `40.5` → `"40.50"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// `₹` followed by [`format_amount`].
pub fn format_inr(amount: Decimal) -> String {
    format!("{RUPEE}{}", format_amount(amount))
}

/// `₹` followed by the whole-rupee amount with Indian digit grouping,
/// e.g. `₹1,23,457`.
pub fn format_inr_rounded(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Insert Indian-system separators into a string of digits: the last three
/// digits form one group, the rest are grouped in pairs.
///
/// ```
/// assert_eq!(gst_invoice::core::group_indian("12345678"), "1,23,45,678");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Rate shown next to each tax component, one decimal place.
///
/// Under CGST+SGST each component carries half the nominal rate.
pub fn rate_label(tax_type: TaxType, rate_percent: Decimal) -> String {
    let shown = match tax_type {
        TaxType::CgstSgst => rate_percent / dec!(2),
        TaxType::Igst => rate_percent,
    };
    let shown = shown.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{shown:.1}%")
}

/// One label/value line of the totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    fn new(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Lines of the on-screen totals summary, top to bottom.
pub fn summary_rows(totals: &InvoiceTotals, tax_type: TaxType, rate_percent: Decimal) -> Vec<SummaryRow> {
    let label = rate_label(tax_type, rate_percent);
    let mut rows = vec![SummaryRow::new("Subtotal", format_inr(totals.subtotal))];
    match tax_type {
        TaxType::CgstSgst => {
            rows.push(SummaryRow::new(
                format!("CGST ({label})"),
                format_inr(totals.component_a),
            ));
            rows.push(SummaryRow::new(
                format!("SGST ({label})"),
                format_inr(totals.component_b),
            ));
        }
        TaxType::Igst => rows.push(SummaryRow::new(
            format!("IGST ({label})"),
            format_inr(totals.component_a),
        )),
    }
    rows.push(SummaryRow::new("Total", format_inr(totals.total)));
    rows.push(SummaryRow::new(
        "Rounded Total",
        format_inr_rounded(totals.rounded_total),
    ));
    rows
}

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out a whole-rupee amount in the Indian numbering system.
///
/// ```
/// use gst_invoice::core::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_in_words(dec!(531)), "Five Hundred Thirty One");
/// assert_eq!(amount_in_words(dec!(1250000)), "Twelve Lakh Fifty Thousand");
/// ```
///
/// Fractions are rounded away first; negative amounts get a "Minus" prefix.
pub fn amount_in_words(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let magnitude: u128 = whole.abs().trunc().to_string().parse().unwrap_or(0);
    let words = if magnitude == 0 {
        ONES[0].to_string()
    } else {
        spell(magnitude).join(" ")
    };
    if whole.is_sign_negative() && magnitude != 0 {
        format!("Minus {words}")
    } else {
        words
    }
}

fn spell(n: u128) -> Vec<&'static str> {
    let mut words = Vec::new();
    let crore = n / 10_000_000;
    let lakh = (n / 100_000) % 100;
    let thousand = (n / 1_000) % 100;
    let hundred = (n / 100) % 10;
    let rest = (n % 100) as usize;

    if crore > 0 {
        words.extend(spell(crore));
        words.push("Crore");
    }
    for (count, unit) in [(lakh, "Lakh"), (thousand, "Thousand"), (hundred, "Hundred")] {
        if count > 0 {
            words.extend(below_hundred(count as usize));
            words.push(unit);
        }
    }
    if rest > 0 {
        words.extend(below_hundred(rest));
    }
    words
}

fn below_hundred(n: usize) -> Vec<&'static str> {
    if n < 20 {
        vec![ONES[n]]
    } else if n % 10 == 0 {
        vec![TENS[n / 10]]
    } else {
        vec![TENS[n / 10], ONES[n % 10]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(dec!(40.5)), "40.50");
        assert_eq!(format_amount(dec!(5.9994)), "6.00");
        assert_eq!(format_amount(dec!(0.005)), "0.01");
        assert_eq!(format_amount(dec!(450)), "450.00");
        assert_eq!(format_inr(dec!(111.9888)), "₹111.99");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(group_indian("531"), "531");
        assert_eq!(group_indian("1500"), "1,500");
        assert_eq!(group_indian("123457"), "1,23,457");
        assert_eq!(group_indian("10000000"), "1,00,00,000");
        assert_eq!(format_inr_rounded(dec!(123456.5)), "₹1,23,457");
        assert_eq!(format_inr_rounded(dec!(-1500)), "-₹1,500");
    }

    #[test]
    fn rate_labels() {
        assert_eq!(rate_label(TaxType::CgstSgst, dec!(18)), "9.0%");
        assert_eq!(rate_label(TaxType::CgstSgst, dec!(5)), "2.5%");
        assert_eq!(rate_label(TaxType::Igst, dec!(12)), "12.0%");
    }

    #[test]
    fn summary_for_split() {
        let totals = InvoiceTotals {
            subtotal: dec!(450),
            component_a: dec!(40.5),
            component_b: dec!(40.5),
            total: dec!(531),
            rounded_total: dec!(531),
        };
        let rows = summary_rows(&totals, TaxType::CgstSgst, dec!(18));
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Subtotal", "CGST (9.0%)", "SGST (9.0%)", "Total", "Rounded Total"]
        );
        assert_eq!(rows[1].value, "₹40.50");
        assert_eq!(rows[4].value, "₹531");
    }

    #[test]
    fn words() {
        assert_eq!(amount_in_words(dec!(0)), "Zero");
        assert_eq!(amount_in_words(dec!(15)), "Fifteen");
        assert_eq!(amount_in_words(dec!(90)), "Ninety");
        assert_eq!(amount_in_words(dec!(1500)), "One Thousand Five Hundred");
        assert_eq!(amount_in_words(dec!(100000)), "One Lakh");
        assert_eq!(
            amount_in_words(dec!(98765432)),
            "Nine Crore Eighty Seven Lakh Sixty Five Thousand Four Hundred Thirty Two"
        );
        assert_eq!(amount_in_words(dec!(1000000000)), "One Hundred Crore");
        assert_eq!(amount_in_words(dec!(111.9888)), "One Hundred Twelve");
    }
}
