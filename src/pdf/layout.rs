use lopdf::Object;
use lopdf::content::Operation;

use super::{A4_HEIGHT, A4_WIDTH, PdfOptions};
use crate::document::{Block, ITEM_COLUMN_WEIGHTS, ITEM_COLUMNS, InvoiceDocument};

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Encode text for a WinAnsi Type1 font. Anything outside printable
/// Latin-1 becomes `?`; U+0080..=U+009F would land on WinAnsi's
/// typographic glyphs, so those are replaced too.
pub(super) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(0x80..=0x9F) | Err(_) => b'?',
            Ok(byte) => byte,
        })
        .collect()
}

/// Top-down writer that breaks onto a new page when the cursor reaches the
/// bottom margin.
pub(super) struct PageWriter<'a> {
    options: &'a PdfOptions,
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: i64,
}

impl<'a> PageWriter<'a> {
    pub(super) fn new(options: &'a PdfOptions) -> Self {
        Self {
            options,
            pages: Vec::new(),
            ops: Vec::new(),
            y: A4_HEIGHT - options.margin,
        }
    }

    pub(super) fn finish(mut self) -> Vec<Vec<Operation>> {
        self.pages.push(std::mem::take(&mut self.ops));
        self.pages
    }

    fn left(&self) -> i64 {
        self.options.margin
    }

    fn right(&self) -> i64 {
        A4_WIDTH - self.options.margin
    }

    fn content_width(&self) -> i64 {
        self.right() - self.left()
    }

    fn ensure_room(&mut self, height: i64) {
        if self.y - height < self.options.margin {
            self.pages.push(std::mem::take(&mut self.ops));
            self.y = A4_HEIGHT - self.options.margin;
        }
    }

    fn text_at(&mut self, font: &str, size: i64, x: i64, y: i64, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![Object::Integer(x), Object::Integer(y)],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(to_win_ansi(text))],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn rule(&mut self, x1: i64, x2: i64, y: i64) {
        self.ops.push(Operation::new(
            "m",
            vec![Object::Integer(x1), Object::Integer(y)],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![Object::Integer(x2), Object::Integer(y)],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn advance(&mut self) {
        self.y -= self.options.line_height;
    }

    /// Approximate Helvetica advance width: half the font size per character.
    fn text_width(&self, text: &str, size: i64) -> i64 {
        i64::try_from(text.chars().count())
            .unwrap_or(i64::MAX)
            .saturating_mul(size)
            / 2
    }

    fn line(&mut self, font: &str, x: i64, text: &str) {
        self.ensure_room(self.options.line_height);
        let size = self.options.font_size;
        let y = self.y;
        self.text_at(font, size, x, y, text);
        self.advance();
    }

    fn line_right(&mut self, font: &str, text: &str) {
        let x = self.right() - self.text_width(text, self.options.font_size);
        self.line(font, x, text);
    }

    /// Two blocks side by side; the cursor ends below the taller one.
    fn columns(&mut self, left: &[(bool, String)], right: &[(bool, String)]) {
        let mid = self.left() + self.content_width() / 2 + 10;
        let rows = left.len().max(right.len());
        for i in 0..rows {
            self.ensure_room(self.options.line_height);
            let (size, y) = (self.options.font_size, self.y);
            if let Some((bold, text)) = left.get(i) {
                let x = self.left();
                self.text_at(font(*bold), size, x, y, text);
            }
            if let Some((bold, text)) = right.get(i) {
                self.text_at(font(*bold), size, mid, y, text);
            }
            self.advance();
        }
        self.advance();
    }

    pub(super) fn write_document(&mut self, doc: &InvoiceDocument) {
        let (left, right) = (self.left(), self.right());

        self.line_right(REGULAR, &doc.copy_label);
        let title_size = self.options.title_size;
        self.ensure_room(title_size + self.options.line_height);
        let title_x = left + (self.content_width() - self.text_width(&doc.title, title_size)) / 2;
        self.y -= title_size - self.options.font_size;
        let y = self.y;
        self.text_at(BOLD, title_size, title_x, y, &doc.title);
        self.advance();
        self.rule(left, right, self.y + self.options.line_height / 2);
        self.advance();

        let info: Vec<(bool, String)> = doc.invoice_info.iter().map(|l| (false, l.clone())).collect();
        self.columns(&block_lines(&doc.consignor), &info);

        let mut bill = block_lines(&doc.bill_to);
        if let Some(ship_to) = &doc.ship_to {
            bill.push((false, String::new()));
            bill.extend(block_lines(ship_to));
        }
        self.columns(&bill, &block_lines(&doc.bank));

        self.item_table(doc);
        self.advance();

        let mut words = vec![
            (true, "Total Invoice Amount (in words):".to_string()),
            (false, doc.amount_in_words.clone()),
            (false, String::new()),
        ];
        words.extend(block_lines(&doc.notes));
        let totals: Vec<(bool, String)> = doc
            .totals
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 2 >= doc.totals.len(), format!("{} {}", r.label, r.value)))
            .collect();
        self.columns(&words, &totals);

        self.rule(left, right, self.y + self.options.line_height / 2);
        self.advance();
        let signature: Vec<(bool, String)> = doc.signature.iter().map(|s| (false, s.clone())).collect();
        let mut sign_col = signature[..signature.len().min(1)].to_vec();
        sign_col.extend([(false, String::new()), (false, String::new())]);
        sign_col.extend(signature.into_iter().skip(1));
        self.columns(&block_lines(&doc.terms), &sign_col);
    }

    fn item_table(&mut self, doc: &InvoiceDocument) {
        let total_weight: f32 = ITEM_COLUMN_WEIGHTS.iter().sum();
        let width = self.content_width() as f32;
        let mut xs = Vec::with_capacity(ITEM_COLUMNS.len());
        let mut x = self.left() as f32;
        for weight in ITEM_COLUMN_WEIGHTS {
            xs.push(x.round() as i64 + 2);
            x += width * weight / total_weight;
        }

        let (left, right) = (self.left(), self.right());
        self.ensure_room(self.options.line_height * 2);
        self.rule(left, right, self.y + self.options.line_height);
        let (size, y) = (self.options.font_size - 1, self.y);
        for (col, heading) in ITEM_COLUMNS.iter().enumerate() {
            self.text_at(BOLD, size, xs[col], y, heading);
        }
        self.rule(left, right, self.y - 3);
        self.advance();

        for row in &doc.rows {
            self.ensure_room(self.options.line_height);
            let y = self.y;
            for (col, cell) in row.cells().iter().enumerate() {
                self.text_at(REGULAR, size, xs[col], y, cell);
            }
            self.rule(left, right, self.y - 3);
            self.advance();
        }
    }
}

fn font(bold: bool) -> &'static str {
    if bold { BOLD } else { REGULAR }
}

fn block_lines(block: &Block) -> Vec<(bool, String)> {
    std::iter::once((true, block.heading.clone()))
        .chain(block.lines.iter().map(|l| (false, l.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_replaces_wide_chars() {
        assert_eq!(to_win_ansi("Rs 531"), b"Rs 531".to_vec());
        assert_eq!(to_win_ansi("₹531"), b"?531".to_vec());
        assert_eq!(to_win_ansi("Mü"), vec![b'M', 0xFC]);
        assert_eq!(to_win_ansi("a\u{80}b\u{9F}"), b"a?b?".to_vec());
        assert_eq!(to_win_ansi("\u{A0}"), vec![0xA0]);
    }

    #[test]
    fn text_width_saturates() {
        let options = PdfOptions::default();
        let writer = PageWriter::new(&options);
        assert_eq!(writer.text_width("abcd", 10), 20);
        assert_eq!(writer.text_width("ab", i64::MAX), i64::MAX / 2);
    }

    #[test]
    fn long_tables_break_pages() {
        let options = PdfOptions::default();
        let mut writer = PageWriter::new(&options);
        for _ in 0..200 {
            writer.line(REGULAR, 20, "row");
        }
        assert!(writer.finish().len() > 1);
    }
}
