use std::fmt::Write;

use super::{Block, ITEM_COLUMNS, InvoiceDocument};

const TEXT_WIDTHS: [usize; 7] = [4, 28, 9, 6, 12, 10, 12];

impl InvoiceDocument {
    /// Plain-text rendering, one section after another.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        line(&mut out, &self.copy_label);
        line(&mut out, &self.title);
        out.push('\n');

        block(&mut out, &self.consignor);
        for info in &self.invoice_info {
            line(&mut out, info);
        }
        out.push('\n');

        block(&mut out, &self.bill_to);
        if let Some(ship_to) = &self.ship_to {
            block(&mut out, ship_to);
        }
        block(&mut out, &self.bank);
        out.push('\n');

        table_row(&mut out, ITEM_COLUMNS);
        let rule: usize = TEXT_WIDTHS.iter().sum::<usize>() + TEXT_WIDTHS.len() - 1;
        line(&mut out, &"-".repeat(rule));
        for row in &self.rows {
            table_row(&mut out, row.cells());
        }
        out.push('\n');

        let label_width = self.totals.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in &self.totals {
            let _ = writeln!(out, "{:<label_width$} {:>12}", row.label, row.value);
        }
        out.push('\n');

        line(&mut out, "Total Invoice Amount (in words):");
        line(&mut out, &self.amount_in_words);
        out.push('\n');

        block(&mut out, &self.notes);
        block(&mut out, &self.terms);
        for s in &self.signature {
            line(&mut out, s);
        }

        out
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn block(out: &mut String, block: &Block) {
    line(out, &block.heading);
    for l in &block.lines {
        line(out, l);
    }
}

fn table_row(out: &mut String, cells: [&str; 7]) {
    let formatted: Vec<String> = cells
        .iter()
        .zip(TEXT_WIDTHS)
        .enumerate()
        .map(|(i, (cell, width))| {
            // only the description is clipped; figures overflow their column
            if i == 1 {
                let cell: String = cell.chars().take(width).collect();
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    line(out, formatted.join(" ").trim_end());
}
