//! Layout engine core implementation.

use crate::config::{Config, LayoutConfig, Palette};
use crate::trip::Trip;

use super::markers::{finalize_nodes, place_nodes};
use super::segments::build_segments;
use super::tracks::boundary_y;
use super::types::Layout;

/// Layout engine configuration and computation.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    pub(crate) config: LayoutConfig,
    pub(crate) palette: Palette,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(config.layout, config.palette)
    }

    /// Compute the full diagram for the trip log. Always recomputes from scratch.
    pub fn layout(&self, trips: &[Trip]) -> Layout {
        let cfg = &self.config;

        // Phase 1: Empty log
        let Some(first) = trips.first() else {
            return Layout {
                nodes: Vec::new(),
                paths: Vec::new(),
                arrows: Vec::new(),
                width: cfg.left_margin * 2.0,
                height: self.canvas_height(),
            };
        };

        // Phase 2: Boundary Y (baseline + curve resolution)
        let ys = boundary_y(cfg, trips);

        // Phase 3: Node placement
        let mut drafts = place_nodes(cfg, &self.palette, trips, &ys);

        // Phase 4: Paths, colours, arrows
        let (paths, arrows) = build_segments(cfg, &self.palette, trips, &mut drafts);

        // Phase 5: Node fill/stroke
        let first_color = paths
            .first()
            .map_or(self.palette.level1.as_str(), |p| p.stroke.as_str());
        let nodes = finalize_nodes(&self.palette, trips, drafts, first_color);

        // Phase 6: Canvas
        let width =
            cfg.left_margin + trips.len() as f64 * cfg.segment_width + cfg.right_margin;

        tracing::debug!(
            trips = trips.len(),
            first = %first.id,
            nodes = nodes.len(),
            arrows = arrows.len(),
            width,
            "layout recomputed"
        );

        Layout {
            nodes,
            paths,
            arrows,
            width,
            height: self.canvas_height(),
        }
    }

    fn canvas_height(&self) -> f64 {
        self.config.base_y + self.config.bottom_padding
    }
}
