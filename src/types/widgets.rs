use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::schema::ActivityCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Alert,
    Warning,
    Nominal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub sleep_hours: f64,
    pub percent: f64,
    pub severity: SeverityTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedGauge {
    pub speed_mph: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub count: usize,
    pub total: usize,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudData {
    pub sleep_hours: f64,
    pub sleep_percent: f64,
    pub severity_tier: SeverityTier,
    pub speed_mph: f64,
    pub speed_percent: f64,
    pub streak_count: usize,
    pub streak_total: usize,
    pub streak_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatCell {
    pub category: ActivityCategory,
    pub period_flag: bool,
    pub tooltip_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    /// Position of the entry in the chronological (oldest-first) log.
    pub entry_index: usize,
    pub value: f64,
    pub cycle_status: String,
    pub x: f64,
    pub y: f64,
    pub is_ghost: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightScale {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub points: Vec<WeightPoint>,
    pub scale: Option<WeightScale>,
    pub draw_line: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub date: String,
    pub activity: String,
    pub speed_mph: f64,
    pub duration: String,
    pub sleep_hours: f64,
    pub weight_lbs: Option<f64>,
    pub vibe: String,
}

/// What the rendering sink should show on one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualState {
    Bar {
        width_percent: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        glow: Option<String>,
    },
    Text {
        text: String,
    },
    Cells {
        cells: Vec<CellVisual>,
    },
    Chart {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        stroke: String,
        dots: Vec<Dot>,
    },
    Rows {
        rows: Vec<RowVisual>,
    },
    Badge {
        text: String,
        color: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellVisual {
    pub classes: Vec<String>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowVisual {
    pub cells: Vec<String>,
    pub vibe_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetUpdate {
    pub target: String,
    pub visual_state: VisualState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub status: ConnectionStatus,
    pub fetched_at: DateTime<Utc>,
    pub entry_count: usize,
    pub empty: bool,
    pub hud: Option<HudData>,
    pub heatmap: Vec<HeatCell>,
    pub chart: ChartData,
    pub table: Vec<TableRow>,
    pub widgets: Vec<WidgetUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineDashboard {
    pub status: ConnectionStatus,
    pub error: String,
    pub widgets: Vec<WidgetUpdate>,
}
