use std::path::PathBuf;

use axum::{body::to_bytes, http::Request, Router};
use orbit_cockpit::{
    config::{Config, SheetSource},
    state::AppState,
    types::schema::ColumnMap,
};
use serde_json::Value;
use tower::ServiceExt;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn app(config: Config) -> Router {
    orbit_cockpit::app(AppState::new(config))
}

fn config_for(name: &str) -> Config {
    Config {
        sheet: SheetSource::File(fixture(name)),
        ..Config::default()
    }
}

async fn get_dashboard(app: Router) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

fn targets(json: &Value) -> Vec<String> {
    json["widgets"]
        .as_array()
        .expect("widgets")
        .iter()
        .filter_map(|w| w["target"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn dashboard_renders_fixture_sheet() {
    let (status, json) = get_dashboard(app(config_for("orbit_log.csv"))).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["status"], "online");
    assert_eq!(json["entry_count"], 4);
    assert_eq!(json["empty"], false);

    let hud = &json["hud"];
    assert_eq!(hud["sleep_hours"], 9.0);
    assert_eq!(hud["sleep_percent"], 100.0);
    assert_eq!(hud["severity_tier"], "nominal");
    assert_eq!(hud["speed_mph"], 4.6);
    assert_eq!(hud["streak_count"], 3);
    assert_eq!(hud["streak_total"], 14);
    assert_eq!(hud["streak_complete"], false);

    let heatmap = json["heatmap"].as_array().expect("heatmap");
    let categories: Vec<&str> = heatmap
        .iter()
        .filter_map(|c| c["category"].as_str())
        .collect();
    assert_eq!(categories, vec!["hit", "maintenance", "rest", "hit"]);
    assert_eq!(heatmap[1]["period_flag"], true);
    assert_eq!(heatmap[0]["tooltip_label"], "3/1/2026: Treadmill");
    assert_eq!(heatmap[2]["tooltip_label"], "3/3/2026: Rest");

    let chart = &json["chart"];
    let weights: Vec<f64> = chart["points"]
        .as_array()
        .expect("points")
        .iter()
        .filter_map(|p| p["value"].as_f64())
        .collect();
    assert_eq!(weights, vec![150.0, 148.0, 152.0]);
    assert_eq!(chart["scale"]["min"], 147.0);
    assert_eq!(chart["scale"]["max"], 153.0);
    assert_eq!(chart["draw_line"], true);
    assert_eq!(chart["points"][1]["is_ghost"], true);

    let table = json["table"].as_array().expect("table");
    assert_eq!(table.len(), 4);
    assert_eq!(table[0]["date"], "3/4/2026");
    assert_eq!(table[0]["vibe"], "Locked In");
    assert_eq!(table[2]["weight_lbs"], Value::Null);
    assert_eq!(table[2]["speed_mph"], 0.0);

    let targets = targets(&json);
    for expected in [
        "battery-level",
        "sleep-stat",
        "avg-speed",
        "speed-gauge",
        "streak-count",
        "pizza-bar",
        "heatmap-grid",
        "weight-chart",
        "table-body",
    ] {
        assert!(targets.iter().any(|t| t == expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn header_only_sheet_is_empty_not_an_error() {
    let (status, json) = get_dashboard(app(config_for("header_only.csv"))).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["empty"], true);
    assert_eq!(json["entry_count"], 0);
    assert_eq!(json["hud"], Value::Null);
    assert_eq!(json["table"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["chart"]["points"].as_array().map(Vec::len), Some(0));
    assert!(targets(&json).iter().any(|t| t == "empty-state"));
}

#[tokio::test]
async fn unreachable_sheet_reports_offline() {
    let (status, json) = get_dashboard(app(config_for("does_not_exist.csv"))).await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "offline");
    assert!(json["error"].as_str().unwrap_or("").contains("does_not_exist.csv"));
    assert_eq!(targets(&json), vec!["brand".to_string()]);
}

#[tokio::test]
async fn oversized_sheet_reports_offline() {
    let config = Config {
        max_sheet_size: 16,
        ..config_for("orbit_log.csv")
    };
    let (status, json) = get_dashboard(app(config)).await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "offline");
}

#[tokio::test]
async fn header_mismatch_fails_fast() {
    let config = Config {
        columns: ColumnMap::from_overrides("weight=8:Body Weight").expect("column map"),
        ..config_for("orbit_log.csv")
    };
    let (status, json) = get_dashboard(app(config)).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap_or("").contains("Body Weight"));
}

#[tokio::test]
async fn invalid_utf8_sheet_reports_offline() {
    let (status, json) = get_dashboard(app(config_for("invalid_utf8.csv"))).await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "offline");
    assert!(json["error"]
        .as_str()
        .unwrap_or("")
        .starts_with("Sheet is not valid UTF-8"));
}

#[tokio::test]
async fn default_config_serves_bundled_sheet() {
    let SheetSource::File(path) = Config::default().sheet else {
        panic!("default sheet should be a file");
    };
    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&path);
    assert!(bundled.is_file(), "missing {}", bundled.display());

    let config = Config {
        sheet: SheetSource::File(bundled),
        ..Config::default()
    };
    let (status, json) = get_dashboard(app(config)).await;
    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(json["status"], "online");
    assert_eq!(json["entry_count"], 4);
}
