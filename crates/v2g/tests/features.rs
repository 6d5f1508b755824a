use v2g::features;

#[test]
fn core_slices_are_always_enabled() {
    for name in ["compatibility", "flowchart", "dashboard"] {
        assert!(features::is_enabled(name), "{name} should be enabled");
    }
    assert!(!features::is_enabled("licensing"));
    assert_eq!(features::is_enabled("server"), cfg!(feature = "server"));
}

#[test]
fn facade_reexports_resolve_end_to_end() {
    use v2g::domain::{Action, ChargerType, Selection};
    use v2g::features::compatibility::{Classification, resolve};

    let selection = Selection::new().with_action(Action::Discharging).with_charger(ChargerType::Ccs);
    assert_eq!(resolve(&selection).verdict.classification, Classification::Compatible);
}

#[cfg(feature = "server")]
#[tokio::test]
async fn api_router_documents_every_route() {
    use axum::Router;
    use v2g::domain::config::AppConfig;
    use v2g::kernel::server::ApiState;

    let state = ApiState::builder().config(AppConfig::default()).build().expect("state");
    let (_router, api): (Router, _) =
        v2g::server::router::api_router().with_state(state).split_for_parts();

    for path in [
        "/health",
        "/api/options",
        "/api/flowchart",
        "/api/flowchart.svg",
        "/api/dashboard/events",
    ] {
        assert!(api.paths.paths.contains_key(path), "missing {path} in OpenAPI document");
    }
}
