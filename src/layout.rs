//! Two-track layout: boundary Y resolution, node markers, segments and arrows.

mod engine;
mod markers;
mod segments;
mod tracks;
mod types;

pub use engine::LayoutEngine;
pub use tracks::{baseline_y, boundary_y, resolve_curves, y_for_level};
pub use types::{Label, Layout, LayoutArrow, LayoutNode, LayoutPath, PathGeometry, Point};
