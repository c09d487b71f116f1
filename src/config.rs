use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::types::palette::Palette;
use crate::types::schema::{CategoryPolicy, ColumnMap};

/// Where the published sheet is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetSource {
    Http(String),
    File(PathBuf),
}

impl SheetSource {
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            SheetSource::Http(location.to_string())
        } else {
            SheetSource::File(PathBuf::from(location))
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SheetSource::Http(_) => "http",
            SheetSource::File(_) => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub sheet: SheetSource,
    pub cache_bust: bool,
    pub fetch_timeout: Duration,
    pub max_sheet_size: usize,
    /// Front-end bundle served for non-API paths. Nothing is served when unset.
    pub static_dir: Option<PathBuf>,
    pub columns: ColumnMap,
    pub categories: CategoryPolicy,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            sheet: SheetSource::File(PathBuf::from("data/orbit_log.csv")),
            cache_bust: true,
            fetch_timeout: Duration::from_secs(15),
            max_sheet_size: 5 * 1024 * 1024,
            static_dir: None,
            columns: ColumnMap::default(),
            categories: CategoryPolicy::default(),
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = env_var("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let sheet = env_var("SHEET_URL")
            .map(|s| SheetSource::from_location(&s))
            .unwrap_or(defaults.sheet);

        let cache_bust = env_var("CACHE_BUST")
            .map(|s| !matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.cache_bust);

        let fetch_timeout = env_var("FETCH_TIMEOUT_SECONDS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);

        let max_sheet_size = match env_var("MAX_SHEET_SIZE_MB") {
            Some(value) => parse_megabytes(&value)?,
            None => defaults.max_sheet_size,
        };

        let static_dir = env_var("STATIC_DIR").map(PathBuf::from).or(defaults.static_dir);

        let columns = match env_var("COLUMN_MAP") {
            Some(overrides) => ColumnMap::from_overrides(&overrides)?,
            None => defaults.columns,
        };

        let mut categories = defaults.categories;
        if let Some(hit) = env_list("HIT_ACTIVITIES") {
            categories.hit = hit;
        }
        if let Some(maintenance) = env_list("MAINTENANCE_ACTIVITIES") {
            categories.maintenance = maintenance;
        }
        if let Some(ghost) = env_list("GHOST_CYCLES") {
            categories.ghost_cycles = ghost;
        }
        if let Some(period) = env_var("PERIOD_CYCLE") {
            categories.period_cycle = period;
        }

        let palette = match env_var("PALETTE") {
            Some(name) => Palette::get(&name).ok_or(ConfigError::UnknownPalette(name))?,
            None => defaults.palette,
        };

        Ok(Self {
            port,
            sheet,
            cache_bust,
            fetch_timeout,
            max_sheet_size,
            static_dir,
            columns,
            categories,
            palette,
        })
    }
}

/// Converts a `MAX_SHEET_SIZE_MB` value to bytes.
pub fn parse_megabytes(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|mb| mb.checked_mul(1024 * 1024))
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "MAX_SHEET_SIZE_MB",
            value: value.to_string(),
        })
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_list(key: &str) -> Option<Vec<String>> {
    env_var(key).map(|s| split_list(&s)).filter(|list| !list.is_empty())
}

pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
