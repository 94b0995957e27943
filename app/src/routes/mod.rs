mod health;
mod project_info;

use crate::server::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// Create all routes for the application.
///
/// JSON endpoints are registered first; anything else falls through to the
/// static site in `public_dir`, with unknown paths resolving to
/// `index.html`.
pub fn create_routes(public_dir: &Path) -> Router<Arc<AppState>> {
    let api_routes = Router::new().route("/project-info", get(project_info::project_info));

    let index = public_dir.join("index.html");
    let serve_dir = ServeDir::new(public_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .fallback_service(serve_dir)
}
