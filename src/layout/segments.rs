//! Per-trip path geometry, colour, labels and discontinuity arrows.

use crate::config::{LayoutConfig, Palette};
use crate::trip::{Level, Trip};

use super::markers::NodeDraft;
use super::tracks::y_for_level;
use super::types::{Label, LayoutArrow, LayoutPath, PathGeometry, Point};

/// Pick the stroke colour for trip `index` running from `start` to `end`.
pub fn path_color<'p>(
    config: &LayoutConfig,
    palette: &'p Palette,
    trip: &Trip,
    index: usize,
    start: Point,
    end: Point,
) -> &'p str {
    if trip.level == Level::Two {
        return &palette.level2;
    }
    let y1 = y_for_level(config, Level::One);
    let y2 = y_for_level(config, Level::Two);

    if start.y == y1 && end.y == y2 {
        &palette.level1
    } else if start.y == y2 && end.y == y1 {
        &palette.curve_down
    } else if index == 0 {
        &palette.start
    } else {
        &palette.level1
    }
}

/// Straight when both ends share a track, otherwise an S-curve with both
/// control points on the horizontal midpoint.
pub fn segment_geometry(config: &LayoutConfig, start: Point, end: Point) -> PathGeometry {
    if (start.y - end.y).abs() < config.straight_tolerance {
        return PathGeometry::Line {
            from: start,
            to: end,
        };
    }
    let reach = config.segment_width * config.control_factor;
    PathGeometry::Cubic {
        from: start,
        ctrl1: Point::new(start.x + reach, start.y),
        ctrl2: Point::new(end.x - reach, end.y),
        to: end,
    }
}

pub fn segment_label(
    config: &LayoutConfig,
    trip: &Trip,
    geometry: &PathGeometry,
    color: &str,
) -> Label {
    let start = geometry.start();
    let end = geometry.end();
    let offset = if geometry.is_curve() {
        config.curved_label_offset
    } else {
        config.flat_label_offset
    };
    Label {
        text: trip.label().to_string(),
        x: start.x + config.segment_width / 2.0,
        y: (start.y + end.y) / 2.0 + offset,
        color: color.to_string(),
    }
}

/// Level-1 trips that neither open the log nor continue the previous trip
/// get an arrow in front of their start node.
pub fn needs_arrow(trip: &Trip, index: usize) -> bool {
    trip.level == Level::One && !trip.is_continuation && index > 0
}

/// Build one path per trip and any arrows, assigning end node strokes as it goes.
pub fn build_segments(
    config: &LayoutConfig,
    palette: &Palette,
    trips: &[Trip],
    nodes: &mut [NodeDraft],
) -> (Vec<LayoutPath>, Vec<LayoutArrow>) {
    let mut paths = Vec::with_capacity(trips.len());
    let mut arrows = Vec::new();

    for (i, trip) in trips.iter().enumerate() {
        let start = nodes[i].pos;
        let end = nodes[i + 1].pos;
        let color = path_color(config, palette, trip, i, start, end);

        nodes[i + 1].stroke = Some(color.to_string());
        if i == 0 {
            nodes[0].stroke = Some(color.to_string());
        }

        if needs_arrow(trip, i) {
            arrows.push(LayoutArrow {
                x: start.x - config.node_radius - config.arrow_gap,
                y: start.y,
                color: palette.arrow.clone(),
                trip: trip.id,
            });
        }

        let geometry = segment_geometry(config, start, end);
        let label = segment_label(config, trip, &geometry, color);
        paths.push(LayoutPath {
            geometry,
            stroke: color.to_string(),
            label,
            trip: trip.id,
        });
    }

    (paths, arrows)
}
