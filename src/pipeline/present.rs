use crate::types::palette::Palette;
use crate::types::schema::PLACEHOLDER;
use crate::types::widgets::{
    CellVisual, ChartData, Dot, HeatCell, HudData, RowVisual, SeverityTier, TableRow, VisualState,
    WidgetUpdate,
};

pub const BATTERY_LEVEL: &str = "battery-level";
pub const SLEEP_STAT: &str = "sleep-stat";
pub const AVG_SPEED: &str = "avg-speed";
pub const SPEED_GAUGE: &str = "speed-gauge";
pub const STREAK_COUNT: &str = "streak-count";
pub const PIZZA_BAR: &str = "pizza-bar";
pub const HEATMAP_GRID: &str = "heatmap-grid";
pub const WEIGHT_CHART: &str = "weight-chart";
pub const TABLE_BODY: &str = "table-body";
pub const BRAND: &str = "brand";
pub const EMPTY_STATE: &str = "empty-state";

const DOT_RADIUS: f64 = 5.0;

pub fn present(
    hud: Option<&HudData>,
    heatmap: &[HeatCell],
    chart: &ChartData,
    table: &[TableRow],
    palette: &Palette,
) -> Vec<WidgetUpdate> {
    let mut widgets = Vec::new();

    match hud {
        Some(hud) => widgets.extend(present_hud(hud, palette)),
        None => widgets.push(update(
            EMPTY_STATE,
            VisualState::Badge {
                text: "NO DATA".to_string(),
                color: palette.warn.to_string(),
            },
        )),
    }
    widgets.push(present_heatmap(heatmap));
    widgets.push(present_chart(chart, palette));
    widgets.push(present_table(table));

    widgets
}

pub fn offline(palette: &Palette) -> Vec<WidgetUpdate> {
    vec![update(
        BRAND,
        VisualState::Badge {
            text: "(OFFLINE)".to_string(),
            color: palette.alert.to_string(),
        },
    )]
}

fn present_hud(hud: &HudData, palette: &Palette) -> Vec<WidgetUpdate> {
    let battery_color = match hud.severity_tier {
        SeverityTier::Alert => palette.alert,
        SeverityTier::Warning => palette.warn,
        SeverityTier::Nominal => palette.nominal,
    };
    let streak_percent = if hud.streak_total == 0 {
        0.0
    } else {
        hud.streak_count as f64 / hud.streak_total as f64 * 100.0
    };
    let (streak_color, streak_glow) = if hud.streak_complete {
        (
            Some(palette.streak_complete.to_string()),
            Some(format!("0 0 15px {}", palette.streak_complete)),
        )
    } else {
        (None, None)
    };

    vec![
        update(
            BATTERY_LEVEL,
            VisualState::Bar {
                width_percent: hud.sleep_percent,
                color: Some(battery_color.to_string()),
                glow: None,
            },
        ),
        update(
            SLEEP_STAT,
            VisualState::Text {
                text: format!("{} hrs", hud.sleep_hours),
            },
        ),
        update(
            AVG_SPEED,
            VisualState::Text {
                text: hud.speed_mph.to_string(),
            },
        ),
        update(
            SPEED_GAUGE,
            VisualState::Bar {
                width_percent: hud.speed_percent,
                color: None,
                glow: None,
            },
        ),
        update(
            STREAK_COUNT,
            VisualState::Text {
                text: format!("{} / {} Days", hud.streak_count, hud.streak_total),
            },
        ),
        update(
            PIZZA_BAR,
            VisualState::Bar {
                width_percent: streak_percent,
                color: streak_color,
                glow: streak_glow,
            },
        ),
    ]
}

fn present_heatmap(cells: &[HeatCell]) -> WidgetUpdate {
    let cells = cells
        .iter()
        .map(|cell| {
            let mut classes = vec!["heat-box".to_string()];
            if cell.period_flag {
                classes.push("period-mode".to_string());
            }
            classes.push(cell.category.as_str().to_string());
            CellVisual {
                classes,
                title: cell.tooltip_label.clone(),
            }
        })
        .collect();

    update(HEATMAP_GRID, VisualState::Cells { cells })
}

fn present_chart(chart: &ChartData, palette: &Palette) -> WidgetUpdate {
    let path = if chart.draw_line {
        let mut d = String::new();
        for (idx, point) in chart.points.iter().enumerate() {
            let command = if idx == 0 { "M" } else { " L" };
            d.push_str(&format!("{} {:.2} {:.2}", command, point.x, point.y));
        }
        Some(d)
    } else {
        None
    };

    let dots = chart
        .points
        .iter()
        .map(|point| Dot {
            cx: point.x,
            cy: point.y,
            r: DOT_RADIUS,
            fill: if point.is_ghost {
                palette.ghost.to_string()
            } else {
                palette.baseline.to_string()
            },
        })
        .collect();

    update(
        WEIGHT_CHART,
        VisualState::Chart {
            path,
            stroke: palette.line.to_string(),
            dots,
        },
    )
}

fn present_table(rows: &[TableRow]) -> WidgetUpdate {
    let rows = rows
        .iter()
        .map(|row| RowVisual {
            cells: vec![
                row.date.clone(),
                row.activity.clone(),
                row.speed_mph.to_string(),
                row.duration.clone(),
                row.sleep_hours.to_string(),
                row.weight_lbs
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                row.vibe.clone(),
            ],
            vibe_class: row.vibe.to_lowercase(),
        })
        .collect();

    update(TABLE_BODY, VisualState::Rows { rows })
}

fn update(target: &str, visual_state: VisualState) -> WidgetUpdate {
    WidgetUpdate {
        target: target.to_string(),
        visual_state,
    }
}
