//! Vertical placement of boundaries: baseline track Y and curve resolution.

use crate::config::LayoutConfig;
use crate::trip::{Level, Trip};

/// Y coordinate of a track. Level 2 sits `level_height` above level 1.
pub fn y_for_level(config: &LayoutConfig, level: Level) -> f64 {
    match level {
        Level::One => config.base_y,
        Level::Two => config.base_y - config.level_height,
    }
}

/// One Y per boundary (`trips.len() + 1` values). Boundary 0 follows the
/// first trip's level, boundary k follows trip k-1.
pub fn baseline_y(config: &LayoutConfig, trips: &[Trip]) -> Vec<f64> {
    let Some(first) = trips.first() else {
        return Vec::new();
    };
    std::iter::once(first)
        .chain(trips)
        .map(|t| y_for_level(config, t.level))
        .collect()
}

/// Lift boundaries around level-2 blocks onto the level-2 track so that
/// adjacent level-1 segments curve into and out of them.
///
/// Every rule only ever writes the level-2 Y, so applying this twice is a no-op.
pub fn resolve_curves(config: &LayoutConfig, trips: &[Trip], ys: &mut [f64]) {
    debug_assert_eq!(ys.len(), trips.len() + 1);
    let y2 = y_for_level(config, Level::Two);

    for (i, trip) in trips.iter().enumerate() {
        match trip.level {
            Level::One => {
                if trips.get(i + 1).is_some_and(|next| next.level == Level::Two) {
                    ys[i + 1] = y2;
                }
                if i > 0 && trips[i - 1].level == Level::Two {
                    ys[i] = y2;
                }
            }
            Level::Two => {
                ys[i] = y2;
                ys[i + 1] = y2;
            }
        }
    }
}

/// Final per-boundary Y values used for node placement.
pub fn boundary_y(config: &LayoutConfig, trips: &[Trip]) -> Vec<f64> {
    let mut ys = baseline_y(config, trips);
    if !ys.is_empty() {
        resolve_curves(config, trips, &mut ys);
    }
    ys
}
