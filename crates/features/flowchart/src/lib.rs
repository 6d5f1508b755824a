//! # Flowchart
//!
//! Derives the Grid → Charging Station → Car figure from a compatibility
//! [`Resolution`] and renders it to SVG.
//!
//! The figure is rebuilt on every change; nothing here caches or mutates a
//! previously drawn figure.

mod error;
mod figure;
mod layout;
mod svg;

pub use crate::error::FlowchartError;
pub use crate::figure::{
    Annotation, Axis, Figure, Font, Layout, Line, Marker, Shape, TRANSPARENT, Title, Trace,
    TraceMode,
};
pub use crate::layout::{Bounds, build_figure};
pub use crate::svg::{CANVAS_HEIGHT, CANVAS_WIDTH, escape_xml, render_svg};

use serde::Serialize;
use v2g_compatibility::{Resolution, RuleSet, resolve_with};
use v2g_domain::Selection;

/// A resolved selection together with its figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Drawing {
    pub resolution: Resolution,
    pub figure: Figure,
}

impl Drawing {
    /// Renders the figure as SVG.
    ///
    /// # Errors
    /// See [`render_svg`].
    pub fn to_svg(&self) -> Result<String, FlowchartError> {
        render_svg(&self.figure)
    }
}

/// Resolves `selection` under `rules` and lays out the resulting figure.
#[must_use]
pub fn draw(rules: RuleSet, selection: &Selection) -> Drawing {
    let resolution = resolve_with(rules, selection);
    let figure = build_figure(&resolution);
    Drawing { resolution, figure }
}
