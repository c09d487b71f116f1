use crate::types::entry::LogEntry;
use crate::types::schema::CategoryPolicy;
use crate::types::widgets::{
    Battery, ChartData, HeatCell, HudData, SeverityTier, SpeedGauge, Streak, TableRow, WeightPoint,
    WeightScale,
};

const SLEEP_TARGET_HOURS: f64 = 8.0;
const ALERT_BELOW_HOURS: f64 = 5.0;
const WARN_BELOW_HOURS: f64 = 7.0;
// Gauge spans 3.0..=5.0 mph.
const SPEED_FLOOR_MPH: f64 = 3.0;
const SPEED_SPAN_MPH: f64 = 2.0;
const WEIGHT_PADDING_LBS: f64 = 1.0;

pub const STREAK_WINDOW: usize = 14;
pub const HEATMAP_WINDOW: usize = 28;
pub const CHART_WIDTH: f64 = 1000.0;
pub const CHART_HEIGHT: f64 = 200.0;

// Every calculator below takes entries newest-first.

pub fn sleep_percent(sleep_hours: f64) -> f64 {
    (sleep_hours / SLEEP_TARGET_HOURS * 100.0).clamp(0.0, 100.0)
}

pub fn sleep_severity(sleep_hours: f64) -> SeverityTier {
    if sleep_hours < ALERT_BELOW_HOURS {
        SeverityTier::Alert
    } else if sleep_hours < WARN_BELOW_HOURS {
        SeverityTier::Warning
    } else {
        SeverityTier::Nominal
    }
}

pub fn battery(entries: &[LogEntry]) -> Option<Battery> {
    let latest = entries.first()?;
    Some(Battery {
        sleep_hours: latest.sleep_hours,
        percent: sleep_percent(latest.sleep_hours),
        severity: sleep_severity(latest.sleep_hours),
    })
}

pub fn speed_percent(speed_mph: f64) -> f64 {
    ((speed_mph - SPEED_FLOOR_MPH) / SPEED_SPAN_MPH * 100.0).clamp(0.0, 100.0)
}

pub fn speed_gauge(entries: &[LogEntry]) -> Option<SpeedGauge> {
    let latest = entries.first()?;
    Some(SpeedGauge {
        speed_mph: latest.speed_mph,
        percent: speed_percent(latest.speed_mph),
    })
}

/// Qualifying days among the most recent `STREAK_WINDOW` entries.
pub fn streak(entries: &[LogEntry], policy: &CategoryPolicy) -> Streak {
    let count = entries
        .iter()
        .take(STREAK_WINDOW)
        .filter(|entry| policy.counts_toward_streak(&entry.activity))
        .count();

    Streak {
        count,
        total: STREAK_WINDOW,
        complete: count == STREAK_WINDOW,
    }
}

pub fn hud(entries: &[LogEntry], policy: &CategoryPolicy) -> Option<HudData> {
    let battery = battery(entries)?;
    let speed = speed_gauge(entries)?;
    let streak = streak(entries, policy);

    Some(HudData {
        sleep_hours: battery.sleep_hours,
        sleep_percent: battery.percent,
        severity_tier: battery.severity,
        speed_mph: speed.speed_mph,
        speed_percent: speed.percent,
        streak_count: streak.count,
        streak_total: streak.total,
        streak_complete: streak.complete,
    })
}

/// Last `HEATMAP_WINDOW` entries, oldest on the left.
pub fn heatmap(entries: &[LogEntry], policy: &CategoryPolicy) -> Vec<HeatCell> {
    let window = entries.len().min(HEATMAP_WINDOW);

    entries[..window]
        .iter()
        .rev()
        .map(|entry| HeatCell {
            category: policy.classify(&entry.activity),
            period_flag: policy.is_period(&entry.cycle_status),
            tooltip_label: format!("{}: {}", entry.date, entry.activity),
        })
        .collect()
}

/// Chronological weight readings over the whole log, laid out on the chart canvas.
pub fn weight_series(entries: &[LogEntry], policy: &CategoryPolicy) -> ChartData {
    let readings: Vec<(usize, f64, &str)> = entries
        .iter()
        .rev()
        .enumerate()
        .filter_map(|(idx, entry)| {
            entry
                .weight_lbs
                .map(|weight| (idx, weight, entry.cycle_status.as_str()))
        })
        .collect();

    if readings.is_empty() {
        return ChartData::default();
    }

    let lowest = readings.iter().map(|(_, w, _)| *w).fold(f64::INFINITY, f64::min);
    let highest = readings
        .iter()
        .map(|(_, w, _)| *w)
        .fold(f64::NEG_INFINITY, f64::max);
    let scale = WeightScale {
        min: lowest.floor() - WEIGHT_PADDING_LBS,
        max: highest.ceil() + WEIGHT_PADDING_LBS,
    };
    let range = scale.max - scale.min;
    let count = readings.len();

    let points = readings
        .into_iter()
        .enumerate()
        .map(|(position, (entry_index, value, cycle_status))| {
            let x = if count == 1 {
                CHART_WIDTH / 2.0
            } else {
                position as f64 / (count - 1) as f64 * CHART_WIDTH
            };
            let y = CHART_HEIGHT - (value - scale.min) / range * CHART_HEIGHT;

            WeightPoint {
                entry_index,
                value,
                cycle_status: cycle_status.to_string(),
                x,
                y,
                is_ghost: policy.is_ghost(cycle_status),
            }
        })
        .collect();

    ChartData {
        points,
        scale: Some(scale),
        draw_line: count >= 2,
    }
}

pub fn table(entries: &[LogEntry]) -> Vec<TableRow> {
    entries
        .iter()
        .map(|entry| TableRow {
            date: entry.date.clone(),
            activity: entry.activity.clone(),
            speed_mph: entry.speed_mph,
            duration: entry.duration.clone(),
            sleep_hours: entry.sleep_hours,
            weight_lbs: entry.weight_lbs,
            vibe: entry.vibe.clone(),
        })
        .collect()
}
