mod csv;

pub use csv::CsvParser;

use crate::types::entry::ParsedTable;

pub fn parse(text: &str) -> ParsedTable {
    CsvParser::default().parse(text)
}
