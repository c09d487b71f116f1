use crate::error::SchemaError;
use crate::types::entry::{LogEntry, ParsedTable, RawRow};
use crate::types::schema::{ColumnMap, Field, PLACEHOLDER};

/// Validates the header against the column map, drops it, and returns the
/// typed entries newest-first. A table without any rows is an empty log.
pub fn project(table: &ParsedTable, columns: &ColumnMap) -> Result<Vec<LogEntry>, SchemaError> {
    let Some(header) = table.header() else {
        return Ok(Vec::new());
    };
    columns.validate_header(header)?;

    Ok(table
        .records()
        .iter()
        .rev()
        .map(|row| to_entry(row, columns))
        .collect())
}

pub fn to_entry(row: &RawRow, columns: &ColumnMap) -> LogEntry {
    let timestamp = columns.text(row, Field::Timestamp);
    let date = columns
        .raw(row, Field::Date)
        .map(str::to_string)
        .or_else(|| {
            columns
                .raw(row, Field::Timestamp)
                .and_then(|ts| ts.split_whitespace().next())
                .map(str::to_string)
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    LogEntry {
        timestamp,
        date,
        activity: columns.text(row, Field::Activity),
        speed_mph: columns.number(row, Field::Speed),
        duration: columns.text(row, Field::Duration),
        sleep_hours: columns.number(row, Field::Sleep),
        fuel: columns.text(row, Field::Fuel),
        hygiene: columns.text(row, Field::Hygiene),
        weight_lbs: columns.optional_number(row, Field::Weight),
        cycle_status: columns.text(row, Field::Cycle),
        vibe: columns.text(row, Field::Vibe),
    }
}
