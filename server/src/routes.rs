//! Router assembly.
//!
//! The host only renders the Leptos shell and serves the compiled bundle.
//! Every `/ask`, `/upload` and `/documents/status` call goes from the browser
//! straight to the RAG backend, so nothing here proxies backend traffic.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Routes that exist independently of the Leptos app.
fn host_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Leptos SSR frontend plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[workspace.metadata.leptos]` section).
pub fn leptos_app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving leptos bundle");

    Ok(host_routes(&site_root)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
