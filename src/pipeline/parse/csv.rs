use crate::types::entry::{ParsedTable, RawRow};

/// Single-pass, quote-aware CSV scanner.
///
/// Quoted fields may hold commas, line breaks and `""` escapes. Malformed
/// quoting never fails: an unmatched quote leaves the scanner inside (or
/// outside) a quoted field for the rest of the input.
#[derive(Debug, Default)]
pub struct CsvParser {
    rows: Vec<RawRow>,
    row: RawRow,
    cell: String,
    in_quotes: bool,
    // Byte span of `cell` that came from inside quotes; whitespace there is kept.
    quoted_from: Option<usize>,
    quoted_to: Option<usize>,
}

impl CsvParser {
    pub fn parse(mut self, text: &str) -> ParsedTable {
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    if self.in_quotes && chars.peek() == Some(&'"') {
                        chars.next();
                        self.cell.push('"');
                    } else {
                        self.toggle_quotes();
                    }
                }
                ',' if !self.in_quotes => self.end_cell(),
                '\r' | '\n' if !self.in_quotes => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.end_row();
                }
                _ => self.cell.push(ch),
            }
        }

        // The last line need not be terminated.
        self.end_row();

        ParsedTable { rows: self.rows }
    }

    fn toggle_quotes(&mut self) {
        if self.in_quotes {
            self.quoted_to = Some(self.cell.len());
        } else if self.quoted_from.is_none() {
            self.quoted_from = Some(self.cell.len());
        }
        self.in_quotes = !self.in_quotes;
    }

    fn end_cell(&mut self) {
        let value = self.finish_cell();
        self.row.push(value);
    }

    fn end_row(&mut self) {
        if self.cell.is_empty() && self.row.is_empty() {
            self.quoted_from = None;
            self.quoted_to = None;
            return;
        }
        self.end_cell();
        self.rows.push(std::mem::take(&mut self.row));
    }

    /// Takes the cell buffer, trimming whitespace that lies outside quotes.
    fn finish_cell(&mut self) -> String {
        let raw = std::mem::take(&mut self.cell);
        let quoted_to = if self.in_quotes {
            Some(raw.len())
        } else {
            self.quoted_to
        };
        let start_limit = self.quoted_from.take().unwrap_or(raw.len());
        self.quoted_to = None;

        let start = start_limit - raw[..start_limit].trim_start().len();
        let end_from = quoted_to.unwrap_or(0).max(start);
        let end = end_from + raw[end_from..].trim_end().len();

        raw[start..end].to_string()
    }
}
