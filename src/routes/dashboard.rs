use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::error::AppError;
use crate::pipeline::{self, fetch};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

/// One full refresh: every call re-reads the sheet, nothing is cached.
async fn dashboard(State(state): State<AppState>) -> Result<Response, AppError> {
    let config = state.config();

    let text = match fetch::fetch_sheet(state.client(), config).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("Orbit connection failed ({} source): {}", config.sheet.kind(), err);
            let body = pipeline::offline(err.to_string(), config);
            return Ok((StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response());
        }
    };

    let dashboard = pipeline::assemble(&text, config, Utc::now()).map_err(|err| {
        tracing::error!("Sheet layout does not match the column map: {}", err);
        AppError::from(err)
    })?;

    tracing::info!(
        "Dashboard refreshed: {} entries, {} heatmap cells, {} weight points",
        dashboard.entry_count,
        dashboard.heatmap.len(),
        dashboard.chart.points.len()
    );

    Ok(Json(dashboard).into_response())
}
