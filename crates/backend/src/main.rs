mod api;
mod catalog;
mod config;
mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing_subscriber::EnvFilter;

use api::AppState;
use config::Config;

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(state: AppState, assets_dir: &Path) -> Router {
    // Static file routers are stateless, merge them after the API
    let static_files = Router::new()
        .nest(
            "/uploads",
            cached_static_router(&assets_dir.join("uploads"), CACHE_1DAY),
        )
        .nest(
            "/assets",
            cached_static_router(Path::new("dist/assets"), CACHE_IMMUTABLE),
        );

    api::router(state)
        .route("/", get(serve_index))
        .route("/create-point", get(serve_index))
        .merge(static_files)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = catalog::Catalog::load(&config.assets_dir, &config.public_url)
        .context("loading item catalog")?;

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("creating database directory {}", parent.display())
        })?;
    }
    let storage = storage::Storage::open(&config.db_path).context("opening point database")?;
    tracing::info!(points = storage.count_points()?, "Point database ready");

    let state = AppState {
        catalog: Arc::new(catalog),
        storage,
    };
    let app = build_app(state, &config.assets_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(port = config.port, public_url = %config.public_url, "Server running");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_index() -> Html<String> {
    // Try to serve the built frontend, fall back to a simple message
    match std::fs::read_to_string("dist/index.html") {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Ecoleta</title></head>
<body>
<h1>Ecoleta</h1>
<p>Frontend not built yet. The API is available at <a href="/items">/items</a> and <a href="/points">/points</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}
