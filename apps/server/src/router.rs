use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use v2g::domain::constants::APP_TITLE;
use v2g::kernel::server::ApiState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let mut api = ApiDoc::openapi();
    APP_TITLE.clone_into(&mut api.info.title);
    env!("CARGO_PKG_VERSION").clone_into(&mut api.info.version);

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(v2g::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().route("/", get(index)).merge(openapi_routes).merge(scalar_routes)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
