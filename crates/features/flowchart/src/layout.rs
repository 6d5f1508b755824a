use crate::figure::{
    Annotation, Axis, Figure, Font, Layout, Line, Marker, Shape, TRANSPARENT, Title, Trace,
    TraceMode,
};
use v2g_compatibility::{LineColor, Resolution, Warning};
use v2g_domain::constants::APP_TITLE;
use v2g_domain::{FlowEdge, FlowNode};

/// Margin between the outermost nodes and the compatibility border.
const BORDER_PADDING: f64 = 1.0;
/// Margin between the border and the plot edge.
const AXIS_PADDING: f64 = 1.0;
const BORDER_WIDTH: f64 = 2.0;
const NODE_MARKER_SIZE: f64 = 30.0;
const WARNING_OFFSET: f64 = 0.5;
const WARNING_FONT_SIZE: f64 = 14.0;

/// Rectangle enclosing every node plus [`BORDER_PADDING`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    #[must_use]
    pub fn of_graph() -> Self {
        let positions = FlowNode::ALL.map(FlowNode::position);
        let (min_x, max_x) = min_max(positions.iter().map(|p| p.x));
        let (min_y, max_y) = min_max(positions.iter().map(|p| p.y));

        Self {
            x0: min_x - BORDER_PADDING,
            y0: min_y - BORDER_PADDING,
            x1: max_x + BORDER_PADDING,
            y1: max_y + BORDER_PADDING,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Builds the complete figure for a resolved selection.
#[must_use]
pub fn build_figure(resolution: &Resolution) -> Figure {
    let bounds = Bounds::of_graph();

    let mut data: Vec<Trace> = FlowNode::ALL.into_iter().map(node_trace).collect();
    data.extend(FlowEdge::ALL.into_iter().filter_map(|edge| edge_trace(edge, resolution)));

    let annotations =
        resolution.verdict.message.map(|warning| warning_annotation(warning, &bounds));

    Figure {
        data,
        layout: Layout {
            title: Title { text: APP_TITLE.to_owned() },
            xaxis: Axis {
                range: [bounds.x0 - AXIS_PADDING, bounds.x1 + AXIS_PADDING],
                showticklabels: false,
            },
            yaxis: Axis {
                range: [bounds.y0 - AXIS_PADDING, bounds.y1 + AXIS_PADDING],
                showticklabels: false,
            },
            showlegend: false,
            shapes: vec![border(&bounds, resolution.border_color())],
            annotations: annotations.into_iter().collect(),
        },
    }
}

fn node_trace(node: FlowNode) -> Trace {
    let position = node.position();
    Trace {
        kind: "scatter".to_owned(),
        name: node.label().to_owned(),
        x: vec![position.x],
        y: vec![position.y],
        mode: TraceMode::MarkersText,
        text: vec![node.caption()],
        textposition: Some("top center".to_owned()),
        marker: Some(Marker { size: NODE_MARKER_SIZE, color: LineColor::Black }),
        line: None,
    }
}

fn edge_trace(edge: FlowEdge, resolution: &Resolution) -> Option<Trace> {
    let style = resolution.edges.get(edge);
    if !style.visible {
        return None;
    }

    let (from, to) = edge.endpoints();
    let (from, to) = (from.position(), to.position());
    Some(Trace {
        kind: "scatter".to_owned(),
        name: edge.to_string(),
        x: vec![from.x, to.x],
        y: vec![from.y, to.y],
        mode: TraceMode::Lines,
        text: Vec::new(),
        textposition: None,
        marker: None,
        line: Some(Line { color: style.color, width: f64::from(style.width) }),
    })
}

fn border(bounds: &Bounds, color: LineColor) -> Shape {
    Shape {
        kind: "rect".to_owned(),
        x0: bounds.x0,
        y0: bounds.y0,
        x1: bounds.x1,
        y1: bounds.y1,
        line: Line { color, width: BORDER_WIDTH },
        fillcolor: TRANSPARENT.to_owned(),
    }
}

fn warning_annotation(warning: Warning, bounds: &Bounds) -> Annotation {
    Annotation {
        x: bounds.center_x(),
        y: bounds.y1 + WARNING_OFFSET,
        text: warning.text().to_owned(),
        showarrow: false,
        font: Font { color: LineColor::Red, size: WARNING_FONT_SIZE },
        bgcolor: "white".to_owned(),
        bordercolor: LineColor::Red,
        borderwidth: 1.0,
        borderpad: 4.0,
        opacity: 0.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_the_node_positions() {
        let bounds = Bounds::of_graph();
        assert_eq!(bounds, Bounds { x0: -1.0, y0: 2.0, x1: 8.0, y1: 4.0 });
        assert!((bounds.center_x() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn neutral_figure_has_nodes_and_black_border_only() {
        let figure = build_figure(&Resolution::default());
        assert_eq!(figure.node_traces().count(), 3);
        assert_eq!(figure.edge_traces().count(), 0);
        assert!(figure.layout.annotations.is_empty());

        let border = figure.border().expect("border shape");
        assert_eq!(border.line.color, LineColor::Black);
        assert_eq!(figure.layout.xaxis.range, [-2.0, 9.0]);
        assert_eq!(figure.layout.yaxis.range, [1.0, 5.0]);
    }
}
