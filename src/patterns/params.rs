//! Pattern parameter types.
//!
//! Contains the tunable parameter bundle shared by every pattern algorithm,
//! plus the bounded domains the interactive controls expose.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Tunable parameters for one frame of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternParams {
    /// Recursion depth or element count, depending on the algorithm.
    pub depth: u32,
    /// Rotation speed in degrees per second.
    pub rotation_speed_deg: f64,
    /// Per-level size multiplier (values above 1.0 grow outward).
    pub shrink_factor: f64,
    /// Distance multiplier between neighbouring elements.
    pub spacing_factor: f64,
    /// Amplitude of the sinusoidal rotation/hue perturbation.
    pub wobble_strength: f64,
    /// Time offset between branches in milliseconds.
    pub delay_ms: f64,
    /// Hue span in degrees covered by one pattern.
    pub hue_range: f64,
}

impl PatternParams {
    /// Rotation speed converted to radians per millisecond.
    pub fn rotation_speed_rad_per_ms(&self) -> f64 {
        self.rotation_speed_deg * PI / 180_000.0
    }

    /// Read a field as a float.
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Depth => self.depth as f64,
            ParamField::RotationSpeed => self.rotation_speed_deg,
            ParamField::ShrinkFactor => self.shrink_factor,
            ParamField::Spacing => self.spacing_factor,
            ParamField::WobbleStrength => self.wobble_strength,
            ParamField::Delay => self.delay_ms,
            ParamField::HueRange => self.hue_range,
        }
    }

    /// Write a field. Depth is rounded to the nearest non-negative integer.
    pub fn set(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::Depth => self.depth = value.round().max(0.0) as u32,
            ParamField::RotationSpeed => self.rotation_speed_deg = value,
            ParamField::ShrinkFactor => self.shrink_factor = value,
            ParamField::Spacing => self.spacing_factor = value,
            ParamField::WobbleStrength => self.wobble_strength = value,
            ParamField::Delay => self.delay_ms = value,
            ParamField::HueRange => self.hue_range = value,
        }
    }
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            depth: 5,
            rotation_speed_deg: 12.0,
            shrink_factor: 0.55,
            spacing_factor: 1.12,
            wobble_strength: 0.2,
            delay_ms: 80.0,
            hue_range: 240.0,
        }
    }
}

/// Identifies one tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamField {
    Depth,
    RotationSpeed,
    ShrinkFactor,
    Spacing,
    WobbleStrength,
    Delay,
    HueRange,
}

impl ParamField {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "depth" => Some(Self::Depth),
            "rotationspeed" | "rotation-speed" | "rotation" => Some(Self::RotationSpeed),
            "shrinkfactor" | "shrink-factor" | "shrink" => Some(Self::ShrinkFactor),
            "spacing" | "spacingfactor" | "spacing-factor" => Some(Self::Spacing),
            "wobblestrength" | "wobble-strength" | "wobble" => Some(Self::WobbleStrength),
            "delay" | "delayms" | "delay-ms" => Some(Self::Delay),
            "huerange" | "hue-range" | "hue" => Some(Self::HueRange),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::RotationSpeed => "rotationSpeed",
            Self::ShrinkFactor => "shrinkFactor",
            Self::Spacing => "spacing",
            Self::WobbleStrength => "wobbleStrength",
            Self::Delay => "delay",
            Self::HueRange => "hueRange",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Depth,
            Self::RotationSpeed,
            Self::ShrinkFactor,
            Self::Spacing,
            Self::WobbleStrength,
            Self::Delay,
            Self::HueRange,
        ]
    }

    /// Human-readable echo of a value, as shown next to its control.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Depth => format!("{}", value.round() as i64),
            Self::RotationSpeed => format!("{}°/s", value),
            Self::ShrinkFactor | Self::Spacing | Self::WobbleStrength => format!("{:.2}", value),
            Self::Delay => format!("{}ms", value),
            Self::HueRange => format!("{}°", value),
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounded, stepped domain of one control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamBounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of steps between `min` and `max`.
    pub fn step_count(&self) -> u64 {
        if self.step <= 0.0 || self.max <= self.min {
            return 0;
        }
        ((self.max - self.min) / self.step).round() as u64
    }

    /// Decimal places needed to represent the step exactly.
    pub fn decimals(&self) -> i32 {
        for decimals in 0..=9 {
            let scaled = self.step * 10f64.powi(decimals);
            if (scaled - scaled.round()).abs() < 1e-9 {
                return decimals;
            }
        }
        9
    }

    /// Value at step `index`, rounded to the step's precision.
    pub fn value_at(&self, index: u64) -> f64 {
        let index = index.min(self.step_count());
        let raw = self.min + self.step * index as f64;
        let scale = 10f64.powi(self.decimals());
        (raw * scale).round() / scale
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `value` sits on the step grid anchored at `min`.
    pub fn is_on_step(&self, value: f64) -> bool {
        if self.step <= 0.0 {
            return value == self.min;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-6
    }
}

/// Domains for every tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamBoundsTable {
    pub depth: ParamBounds,
    pub rotation_speed: ParamBounds,
    pub shrink_factor: ParamBounds,
    pub spacing: ParamBounds,
    pub wobble_strength: ParamBounds,
    pub delay: ParamBounds,
    pub hue_range: ParamBounds,
}

impl ParamBoundsTable {
    pub fn get(&self, field: ParamField) -> ParamBounds {
        match field {
            ParamField::Depth => self.depth,
            ParamField::RotationSpeed => self.rotation_speed,
            ParamField::ShrinkFactor => self.shrink_factor,
            ParamField::Spacing => self.spacing,
            ParamField::WobbleStrength => self.wobble_strength,
            ParamField::Delay => self.delay,
            ParamField::HueRange => self.hue_range,
        }
    }

    /// Clamp every field of `params` into its domain.
    pub fn clamp_params(&self, params: &PatternParams) -> PatternParams {
        let mut clamped = *params;
        for &field in ParamField::all() {
            clamped.set(field, self.get(field).clamp(params.get(field)));
        }
        clamped
    }

    /// Whether every field of `params` lies within its domain.
    pub fn contains(&self, params: &PatternParams) -> bool {
        ParamField::all()
            .iter()
            .all(|&field| self.get(field).contains(params.get(field)))
    }
}

impl Default for ParamBoundsTable {
    fn default() -> Self {
        Self {
            depth: ParamBounds::new(1.0, 10.0, 1.0),
            rotation_speed: ParamBounds::new(0.0, 60.0, 1.0),
            shrink_factor: ParamBounds::new(0.3, 1.1, 0.01),
            spacing: ParamBounds::new(0.6, 1.6, 0.01),
            wobble_strength: ParamBounds::new(0.0, 1.0, 0.01),
            delay: ParamBounds::new(0.0, 300.0, 5.0),
            hue_range: ParamBounds::new(60.0, 360.0, 10.0),
        }
    }
}
