use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Sheet request failed: {0}")]
    Request(String),
    #[error("Sheet endpoint answered with status {0}")]
    Status(u16),
    #[error("Failed to read sheet file: {0}")]
    Io(String),
    #[error("Sheet too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },
    #[error("Sheet is not valid UTF-8: {0}")]
    Encoding(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Header has {found} columns but the column map needs {needed}")]
    HeaderTooShort { needed: usize, found: usize },
    #[error("Column {index} ({field}) expected header '{expected}', found '{found}'")]
    HeaderMismatch {
        field: &'static str,
        index: usize,
        expected: String,
        found: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown column field: {0}")]
    UnknownField(String),
    #[error("Invalid column map entry: {0}")]
    InvalidEntry(String),
    #[error("Column index {index} is mapped to both {first} and {second}")]
    DuplicateIndex {
        index: usize,
        first: &'static str,
        second: &'static str,
    },
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
