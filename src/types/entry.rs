use serde::{Deserialize, Serialize};

/// One parsed row. Arity may differ between rows when the sheet is malformed.
pub type RawRow = Vec<String>;

/// Rows in file order (oldest first). The first row is the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub rows: Vec<RawRow>,
}

impl ParsedTable {
    pub fn header(&self) -> Option<&RawRow> {
        self.rows.first()
    }

    /// Data rows, header excluded.
    pub fn records(&self) -> &[RawRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Typed projection of a single log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    /// Display label, kept exactly as the sheet formats it.
    pub date: String,
    pub activity: String,
    pub speed_mph: f64,
    /// Opaque; shown but never computed on.
    pub duration: String,
    pub sleep_hours: f64,
    pub fuel: String,
    pub hygiene: String,
    pub weight_lbs: Option<f64>,
    pub cycle_status: String,
    pub vibe: String,
}
