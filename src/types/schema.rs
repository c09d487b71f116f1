use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SchemaError};

/// Shown in place of a missing or empty text cell.
pub const PLACEHOLDER: &str = "-";

/// Meaning of a sheet column. Discriminants follow the default sheet layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp = 0,
    Date = 1,
    Activity = 2,
    Speed = 3,
    Duration = 4,
    Sleep = 5,
    Fuel = 6,
    Hygiene = 7,
    Weight = 8,
    Cycle = 9,
    Vibe = 10,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Timestamp,
        Field::Date,
        Field::Activity,
        Field::Speed,
        Field::Duration,
        Field::Sleep,
        Field::Fuel,
        Field::Hygiene,
        Field::Weight,
        Field::Cycle,
        Field::Vibe,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "timestamp" | "time" => Some(Field::Timestamp),
            "date" => Some(Field::Date),
            "activity" => Some(Field::Activity),
            "speed" => Some(Field::Speed),
            "duration" | "dur" => Some(Field::Duration),
            "sleep" => Some(Field::Sleep),
            "fuel" => Some(Field::Fuel),
            "hygiene" => Some(Field::Hygiene),
            "weight" => Some(Field::Weight),
            "cycle" => Some(Field::Cycle),
            "vibe" => Some(Field::Vibe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::Date => "date",
            Field::Activity => "activity",
            Field::Speed => "speed",
            Field::Duration => "duration",
            Field::Sleep => "sleep",
            Field::Fuel => "fuel",
            Field::Hygiene => "hygiene",
            Field::Weight => "weight",
            Field::Cycle => "cycle",
            Field::Vibe => "vibe",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub index: usize,
    /// Expected header label, checked against the sheet when present.
    pub header: Option<String>,
}

/// Positional column layout of the sheet, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap {
    columns: [Column; 11],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            columns: Field::ALL.map(|field| Column {
                index: field as usize,
                header: None,
            }),
        }
    }
}

impl ColumnMap {
    /// Applies `field=index` or `field=index:Header Label` entries, comma separated,
    /// on top of the default layout.
    pub fn from_overrides(overrides: &str) -> Result<Self, ConfigError> {
        let mut map = Self::default();

        for entry in overrides.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, target) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidEntry(entry.to_string()))?;
            let field =
                Field::from_str(name).ok_or_else(|| ConfigError::UnknownField(name.trim().to_string()))?;

            let (index, header) = match target.split_once(':') {
                Some((index, label)) => (index, Some(label.trim().to_string())),
                None => (target, None),
            };
            let index = index
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEntry(entry.to_string()))?;

            map.columns[field as usize] = Column {
                index,
                header: header.filter(|label| !label.is_empty()),
            };
        }

        map.check_distinct()?;
        Ok(map)
    }

    fn check_distinct(&self) -> Result<(), ConfigError> {
        for (i, first) in Field::ALL.iter().enumerate() {
            for second in &Field::ALL[i + 1..] {
                let index = self.index(*first);
                if index == self.index(*second) {
                    return Err(ConfigError::DuplicateIndex {
                        index,
                        first: first.as_str(),
                        second: second.as_str(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn index(&self, field: Field) -> usize {
        self.columns[field as usize].index
    }

    pub fn column(&self, field: Field) -> &Column {
        &self.columns[field as usize]
    }

    /// Number of cells a header must carry for every mapped column to exist.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    pub fn validate_header(&self, header: &[String]) -> Result<(), SchemaError> {
        let needed = self.width();
        if header.len() < needed {
            return Err(SchemaError::HeaderTooShort {
                needed,
                found: header.len(),
            });
        }

        for field in Field::ALL {
            let column = self.column(field);
            let Some(expected) = column.header.as_deref() else {
                continue;
            };
            let found = header[column.index].trim();
            if !found.eq_ignore_ascii_case(expected.trim()) {
                return Err(SchemaError::HeaderMismatch {
                    field: field.as_str(),
                    index: column.index,
                    expected: expected.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Cell value, or `None` when the row is too short or the cell is empty.
    pub fn raw<'a>(&self, row: &'a [String], field: Field) -> Option<&'a str> {
        row.get(self.index(field))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn text(&self, row: &[String], field: Field) -> String {
        self.raw(row, field).unwrap_or(PLACEHOLDER).to_string()
    }

    pub fn number(&self, row: &[String], field: Field) -> f64 {
        self.optional_number(row, field).unwrap_or(0.0)
    }

    pub fn optional_number(&self, row: &[String], field: Field) -> Option<f64> {
        self.raw(row, field).and_then(parse_leading_float)
    }
}

/// Parses the longest numeric prefix, so `"4.5 hrs"` reads as 4.5.
/// Returns `None` for no digits or a non-finite result.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Hit,
    Maintenance,
    Rest,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Hit => "hit",
            ActivityCategory::Maintenance => "maintenance",
            ActivityCategory::Rest => "rest",
        }
    }
}

/// Recognized labels for activities and cycle states.
///
/// Activities match by case-sensitive substring because the sheet's labels
/// drift ("House Cleaning", "Cleaning - kitchen"). Cycle states match exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPolicy {
    pub hit: Vec<String>,
    pub maintenance: Vec<String>,
    pub ghost_cycles: Vec<String>,
    pub period_cycle: String,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            hit: vec!["Treadmill".to_string()],
            maintenance: vec!["Clean".to_string()],
            ghost_cycles: vec!["Period".to_string(), "Feast".to_string()],
            period_cycle: "Period".to_string(),
        }
    }
}

impl CategoryPolicy {
    pub fn classify(&self, activity: &str) -> ActivityCategory {
        if contains_any(activity, &self.hit) {
            ActivityCategory::Hit
        } else if contains_any(activity, &self.maintenance) {
            ActivityCategory::Maintenance
        } else {
            ActivityCategory::Rest
        }
    }

    pub fn counts_toward_streak(&self, activity: &str) -> bool {
        self.classify(activity) != ActivityCategory::Rest
    }

    pub fn is_period(&self, cycle_status: &str) -> bool {
        cycle_status.trim() == self.period_cycle
    }

    pub fn is_ghost(&self, cycle_status: &str) -> bool {
        let status = cycle_status.trim();
        self.ghost_cycles.iter().any(|ghost| ghost == status)
    }
}

fn contains_any(value: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && value.contains(pattern.as_str()))
}
