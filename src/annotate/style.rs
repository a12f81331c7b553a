//! Drawing options, loadable from configuration files.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// How bounding box outlines are drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub color: Color,

    /// Outline thickness in pixels, centered on the box edge.
    pub line_width: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: Color::GREEN,
            line_width: 3,
        }
    }
}

/// Whether a point marker is filled or drawn as a ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    #[default]
    Filled,
    /// Ring of the given thickness in pixels.
    Outline(u32),
}

/// How point markers are drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub color: Color,
    pub radius: u32,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub stroke: Stroke,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Color::GREEN,
            radius: 3,
            stroke: Stroke::Filled,
        }
    }
}

/// How class name labels are drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Glyph height in pixels.
    pub scale: f32,
    pub background: Color,
    pub text: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            scale: 14.0,
            background: Color::bgr(18, 127, 15),
            text: Color::bgr(218, 227, 218),
        }
    }
}
