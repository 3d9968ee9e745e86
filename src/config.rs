//! Application configuration.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable configuration.

use crate::color::{parse_hex_color, with_alpha};
use crate::patterns::registry::DEFAULT_PATTERN_KEY;
use crate::patterns::{
    ParamBoundsTable, ParamField, PatternLimits, PatternRegistry, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PRIMITIVES,
};
use crate::render::{RenderSettings, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid bounds for {field}: {reason}")]
    InvalidBounds { field: ParamField, reason: String },
    #[error("Unknown pattern type: {0}")]
    UnknownPattern(String),
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pattern type active after initialization.
    pub initial_pattern: String,
    /// Viewport size in CSS pixels.
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
    /// Fade overlay color as `#rrggbb`.
    pub background: String,
    pub fade_alpha: f32,
    pub size_ratio: f64,
    pub hue_drift_per_ms: f64,
    pub max_primitives: usize,
    pub max_recursion_depth: u32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub bounds: ParamBoundsTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_pattern: DEFAULT_PATTERN_KEY.to_string(),
            width: 960.0,
            height: 640.0,
            device_pixel_ratio: 1.0,
            background: "#0c0f1a".to_string(),
            fade_alpha: 0.22,
            size_ratio: 0.19,
            hue_drift_per_ms: 0.02,
            max_primitives: DEFAULT_MAX_PRIMITIVES,
            max_recursion_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            bounds: ParamBoundsTable::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loading config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.background_rgb()?;

        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_positive("device_pixel_ratio", self.device_pixel_ratio)?;
        check_positive("size_ratio", self.size_ratio)?;
        if !(0.0..=1.0).contains(&self.fade_alpha) {
            return Err(ConfigError::InvalidValue {
                name: "fade_alpha",
                reason: format!("{} is outside [0, 1]", self.fade_alpha),
            });
        }
        if !self.hue_drift_per_ms.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "hue_drift_per_ms",
                reason: "must be finite".to_string(),
            });
        }
        if self.max_primitives == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_primitives",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_recursion_depth == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_recursion_depth",
                reason: "must be at least 1".to_string(),
            });
        }

        for &field in ParamField::all() {
            let bounds = self.bounds.get(field);
            if !(bounds.min.is_finite() && bounds.max.is_finite() && bounds.min < bounds.max) {
                return Err(ConfigError::InvalidBounds {
                    field,
                    reason: format!("min {} must be below max {}", bounds.min, bounds.max),
                });
            }
            if !(bounds.step.is_finite() && bounds.step > 0.0) {
                return Err(ConfigError::InvalidBounds {
                    field,
                    reason: format!("step {} must be positive", bounds.step),
                });
            }
        }

        let registry = PatternRegistry::builtin();
        if !registry.contains(&self.initial_pattern) {
            return Err(ConfigError::UnknownPattern(self.initial_pattern.clone()));
        }
        for descriptor in registry.iter() {
            for &field in ParamField::all() {
                let value = descriptor.defaults.get(field);
                if !self.bounds.get(field).contains(value) {
                    return Err(ConfigError::InvalidBounds {
                        field,
                        reason: format!("default {} of '{}' lies outside the range", value, descriptor.key),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn background_rgb(&self) -> Result<[f32; 3], ConfigError> {
        parse_hex_color(&self.background).ok_or_else(|| ConfigError::InvalidColor(self.background.clone()))
    }

    pub fn limits(&self) -> PatternLimits {
        PatternLimits {
            max_primitives: self.max_primitives,
            max_depth: self.max_recursion_depth,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.device_pixel_ratio)
    }

    pub fn to_render_settings(&self) -> Result<RenderSettings, ConfigError> {
        Ok(RenderSettings {
            fade_color: with_alpha(self.background_rgb()?, self.fade_alpha),
            size_ratio: self.size_ratio,
            hue_drift_per_ms: self.hue_drift_per_ms,
            limits: self.limits(),
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("{} must be positive", value),
        })
    }
}
