#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use v2g_kernel::domain::config::AppConfig;
use v2g_kernel::server::{ApiState, ApiStateError, system_router};

#[test]
fn builder_requires_config() {
    let err = ApiState::builder().build().expect_err("config missing");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn builder_rejects_out_of_range_discharge() {
    let mut config = AppConfig::default();
    config.simulation.discharge_default = 101;

    assert!(ApiState::builder().config(config).build().is_err());
}

#[test]
fn state_exposes_config() {
    let state = ApiState::builder().config(AppConfig::default()).build().expect("state");
    assert_eq!(state.config.server.port, 8050);
    assert_eq!(state.config.simulation.discharge_default, 50);
}

#[tokio::test]
async fn health_reports_up_without_caching() {
    let state = ApiState::builder().config(AppConfig::default()).build().expect("state");
    let (router, api): (Router, _) =
        system_router::<ApiState>().with_state(state).split_for_parts();
    assert!(api.paths.paths.contains_key("/health"));

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["status"], "up");
    assert_eq!(json["service"], "Electric Vehicle Charging Simulation");
}
