//! Menagerie demo site.
//!
//! A small server-rendered demo: pick a speed category, get the matching
//! animal option list, optionally through an endpoint that simulates a
//! slow backend with a category-keyed delay.

pub mod config;
pub mod handlers;
pub mod speed;
pub mod submit;
pub mod templates;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Build version for cache busting static assets.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the full application router.
///
/// Shared by the server binary and the test suites so both exercise
/// identical wiring.
pub fn app(config: &SiteConfig) -> Router {
    let router = Router::new()
        .route("/", get(handlers::select::show))
        .route("/options", get(handlers::select::options))
        .nest_service("/public", ServeDir::new(&config.server.assets))
        .layer(TraceLayer::new_for_http());

    with_security_headers(router)
}

fn with_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=63072000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}
