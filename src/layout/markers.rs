//! Node marker placement and fill/stroke finalization.

use crate::config::{LayoutConfig, Palette};
use crate::trip::{Level, Trip, TripId};

use super::types::{LayoutNode, Point};

/// A node whose stroke may still be unassigned.
#[derive(Debug, Clone)]
pub struct NodeDraft {
    pub id: u64,
    pub pos: Point,
    pub is_start: bool,
    pub trip: TripId,
    pub stroke: Option<String>,
}

/// Place `trips.len() + 1` nodes left to right at the resolved boundary Y values.
pub fn place_nodes(
    config: &LayoutConfig,
    palette: &Palette,
    trips: &[Trip],
    ys: &[f64],
) -> Vec<NodeDraft> {
    let Some(first) = trips.first() else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(trips.len() + 1);
    let start_stroke = match first.level {
        Level::One => &palette.start,
        Level::Two => &palette.level2,
    };
    nodes.push(NodeDraft {
        id: first.id.start_node_id(),
        pos: Point::new(config.left_margin, ys[0]),
        is_start: true,
        trip: first.id,
        stroke: Some(start_stroke.clone()),
    });

    let mut x = config.left_margin;
    for (i, trip) in trips.iter().enumerate() {
        x += config.segment_width;
        nodes.push(NodeDraft {
            id: trip.id.end_node_id(),
            pos: Point::new(x, ys[i + 1]),
            is_start: false,
            trip: trip.id,
            stroke: None,
        });
    }
    nodes
}

/// Resolve fills and any missing stroke.
///
/// A node touching a level-2 trip on either side is hollow; the rest keep the
/// solid marker fill. `first_color` is the colour chosen for the first path.
pub fn finalize_nodes(
    palette: &Palette,
    trips: &[Trip],
    drafts: Vec<NodeDraft>,
    first_color: &str,
) -> Vec<LayoutNode> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            let ending = i.checked_sub(1).and_then(|j| trips.get(j));
            let starting = trips.get(i);
            let hollow = [ending, starting]
                .into_iter()
                .flatten()
                .any(|t| t.level == Level::Two);

            let fill = if hollow {
                &palette.hollow_fill
            } else {
                &palette.marker_fill
            };
            let stroke = draft.stroke.unwrap_or_else(|| first_color.to_string());

            LayoutNode {
                id: draft.id,
                x: draft.pos.x,
                y: draft.pos.y,
                is_start_node: draft.is_start,
                trip: draft.trip,
                stroke,
                fill: fill.clone(),
            }
        })
        .collect()
}
