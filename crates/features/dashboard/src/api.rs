use crate::controls::DropdownOptions;
use crate::error::{DashboardError, ErrorBody};
use crate::raw::{EventRequest, RawSelection};
use crate::state::{Dashboard, DashboardUpdate};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use v2g_domain::config::AppConfig;
use v2g_domain::constants::DASHBOARD_TAG;
use v2g_flowchart::render_svg;
use v2g_kernel::server::ApiState;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Dashboard endpoints.
pub fn dashboard_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(options_handler))
        .routes(routes!(flowchart_handler))
        .routes(routes!(flowchart_svg_handler))
        .routes(routes!(event_handler))
}

#[utoipa::path(
    get,
    path = "/api/options",
    responses((status = OK, description = "Dropdown and grid options", body = DropdownOptions)),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn options_handler() -> Json<DropdownOptions> {
    Json(DropdownOptions::all())
}

#[utoipa::path(
    get,
    path = "/api/flowchart",
    params(RawSelection),
    responses(
        (status = OK, description = "Verdict, edge styles and figure", body = DashboardUpdate),
        (status = BAD_REQUEST, description = "Unknown option value", body = ErrorBody),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn flowchart_handler(
    State(config): State<AppConfig>,
    Query(raw): Query<RawSelection>,
) -> Result<Json<DashboardUpdate>, DashboardError> {
    let selection = raw.parse()?;
    let dashboard = Dashboard::new(&config.simulation).with_selection(selection);

    Ok(Json(dashboard.view()))
}

#[utoipa::path(
    get,
    path = "/api/flowchart.svg",
    params(RawSelection),
    responses(
        (status = OK, description = "Rendered flowchart", content_type = "image/svg+xml", body = String),
        (status = BAD_REQUEST, description = "Unknown option value", body = ErrorBody),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn flowchart_svg_handler(
    State(config): State<AppConfig>,
    Query(raw): Query<RawSelection>,
) -> Result<Response, DashboardError> {
    let selection = raw.parse()?;
    let view = Dashboard::new(&config.simulation).with_selection(selection).view();
    let svg = render_svg(&view.figure)?;

    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response())
}

#[utoipa::path(
    post,
    path = "/api/dashboard/events",
    request_body = EventRequest,
    responses(
        (status = OK, description = "State after the event", body = DashboardUpdate),
        (status = NO_CONTENT, description = "Event changed nothing"),
        (status = BAD_REQUEST, description = "Unknown option value", body = ErrorBody),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn event_handler(
    State(config): State<AppConfig>,
    Json(request): Json<EventRequest>,
) -> Result<Response, DashboardError> {
    let (mut dashboard, event) = request.to_dashboard(&config.simulation)?;

    Ok(match dashboard.apply(event) {
        Some(update) => Json(update).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
