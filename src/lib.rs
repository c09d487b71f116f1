pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod types;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Full application router: API routes plus the static front-end as fallback
/// when a bundle directory is configured.
pub fn app(state: state::AppState) -> Router {
    let mut router = Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router());

    if let Some(static_dir) = state.config().static_dir.clone() {
        let serve_dir =
            ServeDir::new(&static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
    }

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
