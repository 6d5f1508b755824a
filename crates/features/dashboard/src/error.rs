use v2g_flowchart::FlowchartError;

/// Errors raised while handling dashboard input.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A dropdown value that is not one of the offered options.
    #[error("Invalid {field} option: '{value}'")]
    InvalidOption { field: &'static str, value: String },

    /// The flowchart could not be rendered.
    #[error("Dashboard render error: {source}")]
    Render {
        #[from]
        source: FlowchartError,
    },
}

impl DashboardError {
    pub(crate) fn invalid_option(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption { field, value: value.into() }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::DashboardError;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    /// JSON body returned for rejected requests.
    #[derive(Debug, Serialize, utoipa::ToSchema)]
    pub struct ErrorBody {
        pub error: &'static str,
        pub message: String,
    }

    impl IntoResponse for DashboardError {
        fn into_response(self) -> Response {
            let (status, error) = match &self {
                Self::InvalidOption { .. } => (StatusCode::BAD_REQUEST, "invalid_option"),
                Self::Render { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "render_failed"),
            };

            if status.is_server_error() {
                tracing::error!(error = %self, "dashboard request failed");
            } else {
                tracing::debug!(error = %self, "dashboard request rejected");
            }

            (status, Json(ErrorBody { error, message: self.to_string() })).into_response()
        }
    }
}

#[cfg(feature = "server")]
pub use response::ErrorBody;
