use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "PAINT_BRUSH_CONFIG";

/// Canvas geometry and the engine constants the tools read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to defaults
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Background fill, also the eraser color
    pub background: [u8; 3],
    /// Freehand samples closer than this to the previous one are dropped
    pub min_sample_distance: f32,
    /// Area tolerance of the triangle hit test
    pub triangle_tolerance: f64,
    /// Eraser strokes are this many times wider than the active stroke width
    pub eraser_width_factor: f32,
    pub default_stroke_width: f32,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            background: [255, 255, 255],
            min_sample_distance: 2.0,
            triangle_tolerance: 0.01,
            eraser_width_factor: 2.0,
            default_stroke_width: 2.0,
            min_stroke_width: 1.0,
            max_stroke_width: 20.0,
        }
    }
}

impl CanvasConfig {
    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> PaintResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> PaintResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    ///
    /// A config that cannot be read is reported and replaced by defaults so the
    /// application still starts.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", path);
                config
            }
            Err(err) => {
                log::error!("Failed to load canvas config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> PaintResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }

        let (min, max) = (self.min_stroke_width, self.max_stroke_width);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(PaintError::InvalidStrokeRange { min, max });
        }

        let positive = [
            ("default_stroke_width", f64::from(self.default_stroke_width)),
            ("min_sample_distance", f64::from(self.min_sample_distance)),
            ("eraser_width_factor", f64::from(self.eraser_width_factor)),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PaintError::InvalidSetting { name, value });
            }
        }

        if !(self.triangle_tolerance.is_finite() && self.triangle_tolerance >= 0.0) {
            return Err(PaintError::InvalidSetting {
                name: "triangle_tolerance",
                value: self.triangle_tolerance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_canvas() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (900, 600));
        assert_eq!(config.background_color(), Color32::WHITE);
        assert_eq!(config.min_sample_distance, 2.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json_str(r#"{ "width": 320, "height": 200 }"#).unwrap();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.eraser_width_factor, 2.0);
    }

    #[test]
    fn test_zero_sized_canvas_rejected() {
        let err = CanvasConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidCanvasSize { width: 0, .. }));
    }

    #[test]
    fn test_inverted_stroke_range_rejected() {
        let err = CanvasConfig::from_json_str(r#"{ "min_stroke_width": 30.0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidStrokeRange { min, max } if min == 30.0 && max == 20.0));

        let err = CanvasConfig::from_json_str(r#"{ "min_stroke_width": 0.0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidStrokeRange { .. }));
    }

    #[test]
    fn test_non_finite_stroke_range_rejected() {
        let config = CanvasConfig {
            max_stroke_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PaintError::InvalidStrokeRange { .. })));

        let config = CanvasConfig {
            min_stroke_width: f32::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PaintError::InvalidStrokeRange { .. })));
    }

    #[test]
    fn test_non_positive_engine_constants_rejected() {
        let err = CanvasConfig::from_json_str(r#"{ "eraser_width_factor": 0.0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidSetting { name: "eraser_width_factor", .. }));

        let err = CanvasConfig::from_json_str(r#"{ "min_sample_distance": -1.0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidSetting { name: "min_sample_distance", .. }));

        let err = CanvasConfig::from_json_str(r#"{ "triangle_tolerance": -0.5 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidSetting { name: "triangle_tolerance", .. }));

        let config = CanvasConfig {
            default_stroke_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PaintError::InvalidSetting { name: "default_stroke_width", .. })
        ));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = CanvasConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, PaintError::Config(_)));
    }
}
