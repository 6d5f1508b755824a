//! Figure model.
//!
//! Field names follow the plotting-library JSON schema (`data` + `layout`, shapes and
//! annotations inside the layout), so a browser client can hand a serialized
//! [`Figure`] straight to a plotting library or draw it with [`crate::render_svg`].

use serde::{Deserialize, Serialize};
use v2g_compatibility::LineColor;

/// Fill used for the border rectangle.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Traces drawn as lines (the visible edges).
    pub fn edge_traces(&self) -> impl Iterator<Item = &Trace> {
        self.data.iter().filter(|trace| trace.mode == TraceMode::Lines)
    }

    /// Traces drawn as labelled markers (the nodes).
    pub fn node_traces(&self) -> impl Iterator<Item = &Trace> {
        self.data.iter().filter(|trace| trace.mode == TraceMode::MarkersText)
    }

    /// The compatibility border, if present.
    #[must_use]
    pub fn border(&self) -> Option<&Shape> {
        self.layout.shapes.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TraceMode {
    #[serde(rename = "markers+text")]
    MarkersText,
    #[serde(rename = "lines")]
    Lines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Marker {
    pub size: f64,
    pub color: LineColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Line {
    pub color: LineColor,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Axis {
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<f64>))]
    pub range: [f64; 2],
    pub showticklabels: bool,
}

impl Axis {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.range[1] - self.range[0]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: Line,
    pub fillcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    pub font: Font,
    pub bgcolor: String,
    pub bordercolor: LineColor,
    pub borderwidth: f64,
    pub borderpad: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Font {
    pub color: LineColor,
    pub size: f64,
}
