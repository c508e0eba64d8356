//! Canvas configuration.

use crate::error::CanvasError;
use crate::model::Color;
use serde::{Deserialize, Serialize};

/// Default number of snapshots kept per view, including the empty snapshot 0.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Styling applied to newly created text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextDefaults {
    pub font_size: f32,
    pub font_family: String,
    pub color: Color,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            font_family: "Arial".to_string(),
            color: Color::BLACK,
        }
    }
}

/// Configuration for a canvas session.
///
/// Every field has a default, so a host can supply a partial JSON object
/// (`{"width": 500}`) and inherit the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Shared canvas width, identical for every view.
    pub width: f32,
    pub height: f32,
    /// Maximum snapshots per view. Values below 1 are treated as 1.
    pub history_limit: usize,
    pub text: TextDefaults,
    /// Edge length of images placed by the asset picker.
    pub image_default_size: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            history_limit: DEFAULT_HISTORY_LIMIT,
            text: TextDefaults::default(),
            image_default_size: 128.0,
        }
    }
}

impl CanvasConfig {
    /// Parse a (possibly partial) JSON configuration object.
    ///
    /// # Errors
    /// Returns [`CanvasError::Json`] if the input is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// History limit with the lower bound applied.
    pub fn effective_history_limit(&self) -> usize {
        self.history_limit.max(1)
    }

    /// Top-left corner that centres a square of `size` on the canvas.
    pub fn centered_origin(&self, size: f32) -> (f32, f32) {
        (self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CanvasConfig::from_json(r##"{"width": 500, "text": {"color": "#FF0000"}}"##)
            .unwrap();
        assert_eq!(config.width, 500.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.text.font_family, "Arial");
        assert_eq!(config.text.color.to_hex(), "#FF0000");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CanvasConfig::from_json("{width:").is_err());
    }

    #[test]
    fn zero_history_limit_is_clamped() {
        let config = CanvasConfig {
            history_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_history_limit(), 1);
    }

    #[test]
    fn asset_picker_origin() {
        let config = CanvasConfig::default();
        assert_eq!(config.centered_origin(128.0), (236.0, 236.0));
    }
}
