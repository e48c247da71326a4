//! Scene input and placement output shapes.
//!
//! A scene is the JSON document handed to the pass: the map center,
//! optionally the map scale factor, and one entry per label with its
//! anchor point and current box. Placements come back out as the same
//! origin-plus-extent box shape, keyed by label id.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::declutter::{LabelRect, Point};
use crate::error::SceneError;

/// Axis-aligned box as origin plus extent, the wire shape for both
/// input rectangles and output placements. Origin is the top-left in
/// screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxExtent {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxExtent {
    pub fn to_rect(self) -> LabelRect {
        LabelRect::from_origin(self.x, self.y, self.width, self.height)
    }

    pub fn from_rect(rect: &LabelRect) -> Self {
        Self {
            x: rect.a.x,
            y: rect.a.y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// One label to relocate: a stable id, the anchor the label points at,
/// and the box it currently occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCandidate {
    pub id: String,
    pub anchor: Point,
    pub rect: BoxExtent,
}

/// A full declutter scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub map_center: Point,
    /// Display scale; push-out distances shrink beyond a threshold.
    #[serde(default = "default_scale")]
    pub map_scale_factor: f64,
    pub labels: Vec<LabelCandidate>,
}

fn default_scale() -> f64 {
    1.0
}

pub fn parse_scene(input: &str) -> Result<Scene, SceneError> {
    Ok(serde_json::from_str(input)?)
}

pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    parse_scene(&fs::read_to_string(path)?)
}

/// Serialize placements as pretty JSON, id → origin-plus-extent box.
pub fn placements_json(placements: &BTreeMap<String, LabelRect>) -> serde_json::Result<String> {
    let boxes: BTreeMap<&str, BoxExtent> = placements
        .iter()
        .map(|(id, rect)| (id.as_str(), BoxExtent::from_rect(rect)))
        .collect();
    serde_json::to_string_pretty(&boxes)
}
