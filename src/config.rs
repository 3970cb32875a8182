//! Geometry constants and colours for the layout engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed visual constants. Every coordinate the engine emits derives from these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Y of the level-1 track
    pub base_y: f64,
    /// Distance the level-2 track sits above level 1
    pub level_height: f64,
    /// Horizontal distance between consecutive nodes
    pub segment_width: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub node_radius: f64,
    pub node_stroke_width: f64,
    /// Gap between an arrow and the node it points at
    pub arrow_gap: f64,
    pub arrow_size: f64,
    /// Below this vertical delta a segment is drawn straight
    pub straight_tolerance: f64,
    /// Control point distance as a fraction of the segment width
    pub control_factor: f64,
    pub flat_label_offset: f64,
    pub curved_label_offset: f64,
    /// Space kept below the level-1 track
    pub bottom_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_y: 100.0,
            level_height: 50.0,
            segment_width: 140.0,
            left_margin: 50.0,
            right_margin: 50.0,
            node_radius: 6.0,
            node_stroke_width: 2.0,
            arrow_gap: 4.0,
            arrow_size: 10.0,
            straight_tolerance: 0.1,
            control_factor: 0.5,
            flat_label_offset: -20.0,
            curved_label_offset: -28.0,
            bottom_padding: 30.0,
        }
    }
}

/// Colours assigned to paths, nodes and arrows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// First level-1 segment when it is flat
    pub start: String,
    /// Flat level-1 segments and level-1 segments rising into level 2
    pub level1: String,
    pub curve_down: String,
    pub level2: String,
    pub arrow: String,
    /// Solid fill of level-1 node markers
    pub marker_fill: String,
    /// Fill of markers touching level 2
    pub hollow_fill: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: "#673ab7".to_string(),
            level1: "#00bcd4".to_string(),
            curve_down: "#9e9e9e".to_string(),
            level2: "#f68b1f".to_string(),
            arrow: "#00bcd4".to_string(),
            marker_fill: "#00bcd4".to_string(),
            hollow_fill: "white".to_string(),
        }
    }
}

/// Config file shape: `{ "layout": {...}, "palette": {...} }`, both optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub palette: Palette,
}

impl Config {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}
