pub mod fetch;
pub mod metrics;
pub mod parse;
pub mod present;
pub mod project;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::SchemaError;
use crate::types::widgets::{ConnectionStatus, Dashboard, OfflineDashboard};

/// Runs one sheet snapshot through parse, projection, the calculators and
/// the presenter.
pub fn assemble(text: &str, config: &Config, fetched_at: DateTime<Utc>) -> Result<Dashboard, SchemaError> {
    let parsed = parse::parse(text);
    let entries = project::project(&parsed, &config.columns)?;
    let policy = &config.categories;

    let hud = metrics::hud(&entries, policy);
    let heatmap = metrics::heatmap(&entries, policy);
    let chart = metrics::weight_series(&entries, policy);
    let table = metrics::table(&entries);
    let widgets = present::present(hud.as_ref(), &heatmap, &chart, &table, &config.palette);

    Ok(Dashboard {
        status: ConnectionStatus::Online,
        fetched_at,
        entry_count: entries.len(),
        empty: table.is_empty(),
        hud,
        heatmap,
        chart,
        table,
        widgets,
    })
}

pub fn offline(error: String, config: &Config) -> OfflineDashboard {
    OfflineDashboard {
        status: ConnectionStatus::Offline,
        error,
        widgets: present::offline(&config.palette),
    }
}
