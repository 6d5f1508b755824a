use axum::http::header;
use axum::{Json, response::IntoResponse};
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use v2g_domain::constants::{APP_TITLE, SYSTEM_TAG};

const NO_STORE: &str = "no-store, no-cache, must-revalidate";

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Liveness report.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub(super) struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Seconds since the first health probe.
    uptime: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Service is up", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let report = HealthResponse {
        status: "up",
        service: APP_TITLE,
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
    };

    ([(header::CACHE_CONTROL, NO_STORE), (header::PRAGMA, "no-cache")], Json(report))
}
