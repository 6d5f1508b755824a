#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;
use v2g_dashboard::dashboard_router;
use v2g_domain::config::{AppConfig, RuleSet};
use v2g_kernel::server::ApiState;

fn app_with(config: AppConfig) -> Router {
    let state = ApiState::builder().config(config).build().expect("state");
    let (router, _api) = dashboard_router().with_state(state).split_for_parts();
    router
}

fn app() -> Router {
    app_with(AppConfig::default())
}

async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.expect("response")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post_event(body: &Value) -> Request<Body> {
    Request::post("/api/dashboard/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn options_list_every_dropdown() {
    let response = send(app(), Request::get("/api/options").body(Body::empty()).expect("request")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["region"]["label"], "Select Regulatory Framework:");
    assert_eq!(json["region"]["options"][0], json!({ "label": "EU", "value": "EU" }));
    assert_eq!(json["charger"]["options"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["car"]["options"][4]["value"], "Tesla Model S");
    assert_eq!(json["gridOptions"][3]["region"], "USA");
    assert_eq!(json["gridOptions"][3]["options"], json!(["Option I", "Option II", "Option III"]));
}

#[tokio::test]
async fn flowchart_resolves_query_selection() {
    let uri = "/api/flowchart?action=Discharging&charger=Level-3&car=Tesla%20Model%20S&region=EU";
    let response = send(app(), Request::get(uri).body(Body::empty()).expect("request")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["verdict"]["classification"], "incompatible");
    assert_eq!(json["verdict"]["message"], "Tesla not compatible with discharging action");
    assert_eq!(json["edges"]["gridToStation"], json!({ "visible": true, "color": "red", "width": 3 }));
    assert_eq!(json["figure"]["layout"]["shapes"][0]["line"]["color"], "red");
    assert_eq!(json["slider"]["value"], 50);
}

#[tokio::test]
async fn flowchart_honours_configured_rules() {
    let mut config = AppConfig::default();
    config.simulation.rules = RuleSet::Table;

    let uri = "/api/flowchart?action=Charging&charger=Level-3&car=Tesla%20Model%20S";
    let response = send(app_with(config), Request::get(uri).body(Body::empty()).expect("request")).await;

    let json = json_body(response).await;
    assert_eq!(json["verdict"]["classification"], "compatible");
    assert!(json["slider"].is_null());
}

#[tokio::test]
async fn flowchart_rejects_unknown_option() {
    let response = send(
        app(),
        Request::get("/api/flowchart?car=DeLorean").body(Body::empty()).expect("request"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "invalid_option");
    assert_eq!(json["message"], "Invalid car option: 'DeLorean'");
}

#[tokio::test]
async fn flowchart_svg_is_served_as_image() {
    let uri = "/api/flowchart.svg?action=Charging&charger=Level-3&car=Kia%20EV6";
    let response = send(app(), Request::get(uri).body(Body::empty()).expect("request")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("image/svg+xml")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let svg = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Charger type doesn&apos;t compatible with car"));
}

#[tokio::test]
async fn event_returns_the_redrawn_state() {
    let body = json!({
        "selection": { "action": "Charging", "charger": "Level-3" },
        "event": { "kind": "carSelected", "value": "Nissan Leaf" }
    });
    let response = send(app(), post_event(&body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["selection"]["car"], "Nissan Leaf");
    assert_eq!(json["verdict"]["message"], "Charger type doesn't compatible with car");
    assert_eq!(json["edges"]["stationToCar"]["color"], "red");
    assert_eq!(json["dischargePercent"], 50);
}

#[tokio::test]
async fn initial_reset_callback_returns_no_content() {
    let body = json!({
        "selection": { "region": "UK" },
        "event": { "kind": "reset", "nClicks": 0 }
    });
    let response = send(app(), post_event(&body)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn reset_click_clears_everything() {
    let body = json!({
        "selection": { "region": "UK", "action": "Discharging", "charger": "CCS" },
        "dischargePercent": 80,
        "resetClicks": 1,
        "event": { "kind": "reset", "nClicks": 2 }
    });
    let response = send(app(), post_event(&body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(
        json["selection"],
        json!({ "region": null, "action": null, "charger": null, "car": null })
    );
    assert_eq!(json["verdict"]["classification"], "neutral");
    assert_eq!(json["dischargePercent"], 50);
    assert_eq!(json["resetClicks"], 2);
    assert!(json["slider"].is_null());
}

#[tokio::test]
async fn event_with_unknown_value_is_rejected() {
    let body = json!({ "event": { "kind": "chargerSelected", "value": "Level-9" } });
    let response = send(app(), post_event(&body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "Invalid charger option: 'Level-9'");
}
