//! Rendering configuration loaded from YAML.
//!
//! Every field is optional; missing fields take the drawing defaults
//! (green 3px boxes, filled 3px points, 14px labels).
//!
//! ```yaml
//! boxes:
//!   color: [0, 0, 255]
//!   line_width: 2
//! points:
//!   radius: 4
//!   stroke: { outline: 1 }
//! labels:
//!   scale: 18.0
//! font_path: /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::annotate::{BoxStyle, LabelStyle, PointStyle};
use crate::error::CocoPlusError;

/// Options for drawing annotations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub boxes: BoxStyle,

    pub points: PointStyle,

    pub labels: LabelStyle,

    /// Font used for class name labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl RenderConfig {
    /// Parses a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CocoPlusError> {
        serde_yaml::from_str(yaml).map_err(|source| CocoPlusError::ConfigParse {
            path: PathBuf::from("<string>"),
            source,
        })
    }

    /// Reads and parses a YAML config file.
    pub fn from_path(path: &Path) -> Result<Self, CocoPlusError> {
        let yaml = fs::read_to_string(path)?;
        serde_yaml::from_str(&yaml).map_err(|source| CocoPlusError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Color, Stroke};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RenderConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.boxes.line_width, 3);
        assert_eq!(config.labels.scale, 14.0);
    }

    #[test]
    fn test_partial_config_overrides_fields() {
        let yaml = "
boxes:
  color: [0, 0, 255]
points:
  stroke:
    outline: 2
labels:
  scale: 18.0
";
        let config = RenderConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.boxes.color, Color::bgr(0, 0, 255));
        assert_eq!(config.boxes.line_width, 3);
        assert_eq!(config.points.stroke, Stroke::Outline(2));
        assert_eq!(config.points.radius, 3);
        assert_eq!(config.labels.scale, 18.0);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = RenderConfig::from_yaml_str("colour: red").unwrap_err();
        assert!(matches!(err, CocoPlusError::ConfigParse { .. }));
    }

    #[test]
    fn test_bad_stroke_is_rejected() {
        let err = RenderConfig::from_yaml_str("points:\n  stroke: dashed\n").unwrap_err();
        assert!(matches!(err, CocoPlusError::ConfigParse { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RenderConfig {
            points: PointStyle {
                stroke: Stroke::Outline(2),
                ..Default::default()
            },
            font_path: Some(PathBuf::from("font.ttf")),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.yaml");
        fs::write(&path, "boxes:\n  line_width: 1\n").unwrap();
        let config = RenderConfig::from_path(&path).unwrap();
        assert_eq!(config.boxes.line_width, 1);
    }
}
