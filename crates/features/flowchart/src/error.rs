use std::borrow::Cow;

/// Errors raised while laying out or rendering a figure.
#[derive(Debug, thiserror::Error)]
pub enum FlowchartError {
    /// An axis range with zero or negative span cannot be projected.
    #[error("Invalid axis range: {message}")]
    InvalidAxis { message: Cow<'static, str> },

    /// Writing the SVG document failed.
    #[error("SVG render error: {source}")]
    Render {
        #[from]
        source: std::fmt::Error,
    },
}
