//! Data structures produced by layout computation.

use serde::Serialize;
use std::fmt;

use crate::trip::TripId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A boundary marker between two trips (or before the first / after the last).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub is_start_node: bool,
    /// Trip ending here, or the first trip for node 0
    pub trip: TripId,
    pub stroke: String,
    pub fill: String,
}

/// Segment shape. Serialized as SVG path data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum PathGeometry {
    Line {
        from: Point,
        to: Point,
    },
    /// Cubic bezier with control points at the segment midpoint, one per endpoint Y.
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl PathGeometry {
    pub fn is_curve(&self) -> bool {
        matches!(self, PathGeometry::Cubic { .. })
    }

    pub fn start(&self) -> Point {
        match *self {
            PathGeometry::Line { from, .. } | PathGeometry::Cubic { from, .. } => from,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            PathGeometry::Line { to, .. } | PathGeometry::Cubic { to, .. } => to,
        }
    }
}

impl fmt::Display for PathGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathGeometry::Line { from, to } => {
                write!(f, "M {},{} L {},{}", from.x, from.y, to.x, to.y)
            }
            PathGeometry::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => write!(
                f,
                "M {},{} C {},{} {},{} {},{}",
                from.x, from.y, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
        }
    }
}

impl From<PathGeometry> for String {
    fn from(geometry: PathGeometry) -> Self {
        geometry.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// Drawn segment for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPath {
    #[serde(rename = "d")]
    pub geometry: PathGeometry,
    pub stroke: String,
    pub label: Label,
    pub trip: TripId,
}

/// Discontinuity marker placed just before a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutArrow {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub trip: TripId,
}

/// The complete layout result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub paths: Vec<LayoutPath>,
    pub arrows: Vec<LayoutArrow>,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// Colour the layout assigned to a trip's path.
    pub fn color_of(&self, trip: TripId) -> Option<&str> {
        self.paths
            .iter()
            .find(|p| p.trip == trip)
            .map(|p| p.stroke.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_path_data() {
        let g = PathGeometry::Line {
            from: Point::new(50.0, 100.0),
            to: Point::new(190.0, 100.0),
        };
        assert_eq!(g.to_string(), "M 50,100 L 190,100");
        assert!(!g.is_curve());
    }

    #[test]
    fn test_cubic_path_data() {
        let g = PathGeometry::Cubic {
            from: Point::new(50.0, 100.0),
            ctrl1: Point::new(120.0, 100.0),
            ctrl2: Point::new(120.0, 50.0),
            to: Point::new(190.0, 50.0),
        };
        assert_eq!(g.to_string(), "M 50,100 C 120,100 120,50 190,50");
        assert_eq!(g.start(), Point::new(50.0, 100.0));
        assert_eq!(g.end(), Point::new(190.0, 50.0));
    }

    #[test]
    fn test_fractional_coordinates() {
        let g = PathGeometry::Line {
            from: Point::new(0.5, 12.25),
            to: Point::new(1.0, 12.25),
        };
        assert_eq!(g.to_string(), "M 0.5,12.25 L 1,12.25");
    }
}
