use crate::config::LayoutConfig;
use crate::layout::{Layout, LayoutArrow, LayoutNode, LayoutPath};
use crate::measure::TextMetrics;
use std::fmt::{self, Write};

pub struct SvgRenderer {
    metrics: TextMetrics,
    node_radius: f64,
    node_stroke_width: f64,
    arrow_size: f64,
    background: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl SvgRenderer {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            metrics: TextMetrics::default(),
            node_radius: config.node_radius,
            node_stroke_width: config.node_stroke_width,
            arrow_size: config.arrow_size,
            background: "white".to_string(),
        }
    }

    pub fn render(&self, layout: &Layout) -> Result<String, fmt::Error> {
        let mut svg = String::new();
        self.write(&mut svg, layout)?;
        Ok(svg)
    }

    pub fn write<W: Write>(&self, svg: &mut W, layout: &Layout) -> fmt::Result {
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            layout.width, layout.height, layout.width, layout.height
        )?;

        writeln!(
            svg,
            r#"<style>
  .trip {{ fill: none; stroke-width: 2; stroke-linecap: round; }}
  .trip-label {{ font-family: monospace; font-size: {}px; }}
  .label-bg {{ fill: {}; opacity: 0.85; }}
</style>"#,
            self.metrics.font_size, self.background
        )?;

        // Paths first so markers sit on top
        for path in &layout.paths {
            self.write_path(svg, path)?;
        }
        for arrow in &layout.arrows {
            self.write_arrow(svg, arrow)?;
        }
        for node in &layout.nodes {
            self.write_node(svg, node)?;
        }

        writeln!(svg, "</svg>")
    }

    fn write_path<W: Write>(&self, svg: &mut W, path: &LayoutPath) -> fmt::Result {
        writeln!(
            svg,
            r#"<path class="trip" d="{}" stroke="{}" />"#,
            path.geometry,
            escape_xml(&path.stroke)
        )?;

        let label = &path.label;
        let (w, h) = self.metrics.label_box(&label.text);
        writeln!(
            svg,
            r#"<rect class="label-bg" x="{}" y="{}" width="{}" height="{}" rx="{}" />"#,
            label.x - w / 2.0,
            label.y - h / 2.0,
            w,
            h,
            h / 2.0
        )?;
        writeln!(
            svg,
            r#"<text class="trip-label" x="{}" y="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            label.x,
            label.y,
            escape_xml(&label.color),
            escape_xml(&label.text)
        )
    }

    fn write_arrow<W: Write>(&self, svg: &mut W, arrow: &LayoutArrow) -> fmt::Result {
        // Right-pointing triangle with its tip on the arrow position
        let half = self.arrow_size / 2.0;
        writeln!(
            svg,
            r#"<polygon points="{},{} {},{} {},{}" fill="{}" />"#,
            arrow.x - self.arrow_size,
            arrow.y - half,
            arrow.x,
            arrow.y,
            arrow.x - self.arrow_size,
            arrow.y + half,
            escape_xml(&arrow.color)
        )
    }

    fn write_node<W: Write>(&self, svg: &mut W, node: &LayoutNode) -> fmt::Result {
        writeln!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="{}" />"#,
            node.x,
            node.y,
            self.node_radius,
            escape_xml(&node.stroke),
            self.node_stroke_width,
            escape_xml(&node.fill)
        )
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
