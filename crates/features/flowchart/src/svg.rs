//! Self-contained SVG rendering of a [`Figure`].

use crate::error::FlowchartError;
use crate::figure::{Annotation, Axis, Figure, Shape, Trace, TraceMode};
use std::borrow::Cow;
use std::fmt::Write;

pub const CANVAS_WIDTH: f64 = 900.0;
pub const CANVAS_HEIGHT: f64 = 450.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_SIDE: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TITLE_FONT_SIZE: f64 = 20.0;
const LABEL_FONT_SIZE: f64 = 14.0;
const LABEL_GAP: f64 = 8.0;
/// Rough glyph advance relative to font size, used to size annotation boxes.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const FONT_FAMILY: &str = "'Open Sans', verdana, arial, sans-serif";

/// Maps data coordinates onto the canvas.
struct Projection {
    x: Axis,
    y: Axis,
}

impl Projection {
    fn new(x: Axis, y: Axis) -> Result<Self, FlowchartError> {
        for (name, axis) in [("x", &x), ("y", &y)] {
            if !axis.span().is_finite() || axis.span() <= 0.0 {
                return Err(FlowchartError::InvalidAxis {
                    message: format!("{name} range {:?} has no extent", axis.range).into(),
                });
            }
        }
        Ok(Self { x, y })
    }

    fn px(&self, x: f64) -> f64 {
        let width = CANVAS_WIDTH - 2.0 * MARGIN_SIDE;
        MARGIN_SIDE + (x - self.x.range[0]) / self.x.span() * width
    }

    fn py(&self, y: f64) -> f64 {
        let height = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (self.y.range[1] - y) / self.y.span() * height
    }
}

/// Renders the figure as an SVG document.
///
/// # Errors
/// Returns [`FlowchartError::InvalidAxis`] when an axis range is empty or inverted.
pub fn render_svg(figure: &Figure) -> Result<String, FlowchartError> {
    let projection = Projection::new(figure.layout.xaxis, figure.layout.yaxis)?;
    let mut out = String::with_capacity(4096);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" font-family="{FONT_FAMILY}">"#
    )?;
    writeln!(out, r#"  <rect x="0" y="0" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" fill="white"/>"#)?;
    writeln!(
        out,
        r##"  <text x="{MARGIN_SIDE}" y="{:.1}" font-size="{TITLE_FONT_SIZE}" fill="#444">{}</text>"##,
        MARGIN_TOP / 2.0,
        escape_xml(&figure.layout.title.text)
    )?;

    for shape in &figure.layout.shapes {
        write_shape(&mut out, &projection, shape)?;
    }
    for trace in figure.data.iter().filter(|t| t.mode == TraceMode::Lines) {
        write_line(&mut out, &projection, trace)?;
    }
    for trace in figure.data.iter().filter(|t| t.mode == TraceMode::MarkersText) {
        write_node(&mut out, &projection, trace)?;
    }
    for annotation in &figure.layout.annotations {
        write_annotation(&mut out, &projection, annotation)?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn write_shape(out: &mut String, p: &Projection, shape: &Shape) -> Result<(), FlowchartError> {
    let (left, right) = (p.px(shape.x0).min(p.px(shape.x1)), p.px(shape.x0).max(p.px(shape.x1)));
    let (top, bottom) = (p.py(shape.y0).min(p.py(shape.y1)), p.py(shape.y0).max(p.py(shape.y1)));

    writeln!(
        out,
        r#"  <rect class="border" x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        right - left,
        bottom - top,
        escape_xml(&shape.fillcolor),
        shape.line.color.css(),
        shape.line.width
    )?;
    Ok(())
}

fn write_line(out: &mut String, p: &Projection, trace: &Trace) -> Result<(), FlowchartError> {
    let Some(line) = trace.line else {
        return Ok(());
    };

    let points = trace
        .x
        .iter()
        .zip(&trace.y)
        .map(|(&x, &y)| format!("{:.1},{:.1}", p.px(x), p.py(y)))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        out,
        r#"  <polyline class="edge" data-name="{}" points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
        escape_xml(&trace.name),
        line.color.css(),
        line.width
    )?;
    Ok(())
}

fn write_node(out: &mut String, p: &Projection, trace: &Trace) -> Result<(), FlowchartError> {
    let radius = trace.marker.map_or(0.0, |m| m.size / 2.0);
    let fill = trace.marker.map_or("black", |m| m.color.css());

    for (index, (&x, &y)) in trace.x.iter().zip(&trace.y).enumerate() {
        let (cx, cy) = (p.px(x), p.py(y));
        writeln!(
            out,
            r#"  <circle class="node" cx="{cx:.1}" cy="{cy:.1}" r="{radius}" fill="{fill}"/>"#
        )?;
        if let Some(text) = trace.text.get(index) {
            writeln!(
                out,
                r##"  <text x="{cx:.1}" y="{:.1}" font-size="{LABEL_FONT_SIZE}" text-anchor="middle" fill="#444">{}</text>"##,
                cy - radius - LABEL_GAP,
                escape_xml(text)
            )?;
        }
    }
    Ok(())
}

fn write_annotation(
    out: &mut String,
    p: &Projection,
    annotation: &Annotation,
) -> Result<(), FlowchartError> {
    let (cx, cy) = (p.px(annotation.x), p.py(annotation.y));
    #[allow(clippy::cast_precision_loss)]
    let text_width = annotation.text.chars().count() as f64 * annotation.font.size * GLYPH_WIDTH_RATIO;
    let width = text_width + 2.0 * annotation.borderpad;
    let height = annotation.font.size + 2.0 * annotation.borderpad;

    writeln!(out, r#"  <g class="annotation" opacity="{}">"#, annotation.opacity)?;
    writeln!(
        out,
        r#"    <rect x="{:.1}" y="{:.1}" width="{width:.1}" height="{height:.1}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        cx - width / 2.0,
        cy - height / 2.0,
        escape_xml(&annotation.bgcolor),
        annotation.bordercolor.css(),
        annotation.borderwidth
    )?;
    writeln!(
        out,
        r#"    <text x="{cx:.1}" y="{cy:.1}" font-size="{}" text-anchor="middle" dominant-baseline="central" fill="{}">{}</text>"#,
        annotation.font.size,
        annotation.font.color.css(),
        escape_xml(&annotation.text)
    )?;
    writeln!(out, "  </g>")?;
    Ok(())
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape_xml(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
