//! Parameter and pattern-type control.
//!
//! The [`Controller`] is the single mutator of [`RenderState`]. Input handlers
//! call into it; the frame renderer only reads the state it exposes.

mod display;
mod selector;

pub use display::DisplayEcho;
pub use selector::{TypeOption, TypeSelector};

use crate::color::HUE_FULL_CIRCLE;
use crate::patterns::registry::DEFAULT_PATTERN_KEY;
use crate::patterns::{ParamBoundsTable, ParamField, PatternParams, PatternRegistry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors from parameter input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Value '{raw}' for {field} is not a number")]
    NotNumeric { field: ParamField, raw: String },

    #[error("Value for {field} is not finite")]
    NonFinite { field: ParamField },
}

/// Mutable animation state read by every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    params: PatternParams,
    active_type: String,
    hue_seed: f64,
    animation_start: f64,
}

impl RenderState {
    pub fn new(params: PatternParams, active_type: &str, hue_seed: f64, animation_start: f64) -> Self {
        Self {
            params,
            active_type: active_type.to_string(),
            hue_seed: hue_seed.rem_euclid(HUE_FULL_CIRCLE),
            animation_start,
        }
    }

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn active_type(&self) -> &str {
        &self.active_type
    }

    /// Hue offset in `[0, 360)` chosen at the last reset.
    pub fn hue_seed(&self) -> f64 {
        self.hue_seed
    }

    /// Timestamp (ms) of the last reset.
    pub fn animation_start(&self) -> f64 {
        self.animation_start
    }
}

/// Owns the render state and applies every input to it.
pub struct Controller {
    registry: PatternRegistry,
    bounds: ParamBoundsTable,
    state: RenderState,
    echo: DisplayEcho,
    rng: StdRng,
}

impl Controller {
    /// Create a controller with `initial_type` active.
    ///
    /// An unregistered `initial_type` falls back to the first registered type.
    pub fn new(
        registry: PatternRegistry,
        bounds: ParamBoundsTable,
        initial_type: &str,
        mut rng: StdRng,
        now: f64,
    ) -> Self {
        let descriptor = registry
            .lookup(initial_type)
            .or_else(|| registry.iter().next())
            .cloned();
        let (key, params) = match &descriptor {
            Some(d) => (d.key.clone(), d.defaults),
            None => (DEFAULT_PATTERN_KEY.to_string(), PatternParams::default()),
        };
        let hue_seed = rng.gen_range(0.0..HUE_FULL_CIRCLE);

        let mut controller = Self {
            registry,
            bounds,
            state: RenderState::new(params, &key, hue_seed, now),
            echo: DisplayEcho::default(),
            rng,
        };
        controller.refresh_echo();
        controller
    }

    /// Controller over the built-in registry with a fixed RNG seed.
    pub fn seeded(seed: u64, now: f64) -> Self {
        Self::new(
            PatternRegistry::builtin(),
            ParamBoundsTable::default(),
            DEFAULT_PATTERN_KEY,
            StdRng::seed_from_u64(seed),
            now,
        )
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn params(&self) -> &PatternParams {
        &self.state.params
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn bounds(&self) -> &ParamBoundsTable {
        &self.bounds
    }

    pub fn echo(&self) -> &DisplayEcho {
        &self.echo
    }

    /// Store a numeric value, clamped to the field's bounds.
    ///
    /// Returns the stored value. Non-finite input is rejected and the
    /// previous value kept.
    pub fn set_parameter(&mut self, field: ParamField, value: f64) -> Result<f64, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::NonFinite { field });
        }
        let clamped = self.bounds.get(field).clamp(value);
        self.state.params.set(field, clamped);
        let stored = self.state.params.get(field);
        self.echo.set_value(field, stored);
        log::debug!("{} = {}", field, stored);
        Ok(stored)
    }

    /// Parse and store a raw input string.
    pub fn set_parameter_text(&mut self, field: ParamField, raw: &str) -> Result<f64, ControlError> {
        let value: f64 = raw.trim().parse().map_err(|_| ControlError::NotNumeric {
            field,
            raw: raw.to_string(),
        })?;
        self.set_parameter(field, value)
    }

    /// Like [`set_parameter_text`](Self::set_parameter_text), addressing the field by name.
    pub fn set_parameter_named(&mut self, name: &str, raw: &str) -> Result<f64, ControlError> {
        let field = ParamField::from_str(name).ok_or_else(|| ControlError::UnknownParameter(name.to_string()))?;
        self.set_parameter_text(field, raw)
    }

    /// Apply a whole parameter bundle field by field.
    pub fn apply_params(&mut self, params: &PatternParams) {
        for &field in ParamField::all() {
            if let Err(e) = self.set_parameter(field, params.get(field)) {
                log::warn!("Skipping {}: {}", field, e);
            }
        }
    }

    /// Switch pattern type. Unknown keys leave the state untouched and return `false`.
    pub fn select_type(&mut self, key: &str, now: f64) -> bool {
        let Some(descriptor) = self.registry.lookup(key).cloned() else {
            log::debug!("Ignoring unknown pattern type '{}'", key);
            return false;
        };

        self.state.active_type = descriptor.key.clone();
        self.echo.set_type(&descriptor.label, &descriptor.description);
        self.apply_params(&descriptor.defaults);
        self.reseed(now);
        log::info!("Pattern type: {} ({})", descriptor.key, descriptor.algorithm.name());
        true
    }

    /// Draw every parameter uniformly from its stepped domain, then reset.
    pub fn randomize(&mut self, now: f64) {
        for &field in ParamField::all() {
            let bounds = self.bounds.get(field);
            let index = self.rng.gen_range(0..=bounds.step_count());
            let value = bounds.value_at(index);
            if let Err(e) = self.set_parameter(field, value) {
                log::warn!("Skipping {}: {}", field, e);
            }
        }
        self.reseed(now);
        log::info!("Randomized parameters: {:?}", self.state.params);
    }

    /// New hue seed and restart time; parameters and type stay.
    pub fn reset_clock_and_hue(&mut self, now: f64) {
        self.reseed(now);
        log::debug!("Reset hue seed to {:.1}", self.state.hue_seed);
    }

    fn reseed(&mut self, now: f64) {
        self.state.hue_seed = self.rng.gen_range(0.0..HUE_FULL_CIRCLE);
        self.state.animation_start = now;
    }

    fn refresh_echo(&mut self) {
        for &field in ParamField::all() {
            self.echo.set_value(field, self.state.params.get(field));
        }
        if let Some(descriptor) = self.registry.lookup(&self.state.active_type) {
            self.echo.set_type(&descriptor.label, &descriptor.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_uses_type_defaults() {
        let controller = Controller::seeded(7, 50.0);
        let state = controller.state();
        assert_eq!(state.active_type(), "classic");
        assert_eq!(*state.params(), PatternParams::default());
        assert_eq!(state.animation_start(), 50.0);
        assert!((0.0..360.0).contains(&state.hue_seed()));
        assert_eq!(controller.echo().type_label(), "Classic");
    }

    #[test]
    fn test_unknown_initial_type_falls_back() {
        let controller = Controller::new(
            PatternRegistry::builtin(),
            ParamBoundsTable::default(),
            "missing",
            StdRng::seed_from_u64(1),
            0.0,
        );
        assert_eq!(controller.state().active_type(), "classic");
    }

    #[test]
    fn test_set_parameter_updates_echo() {
        let mut controller = Controller::seeded(1, 0.0);
        assert_eq!(controller.set_parameter(ParamField::Delay, 125.0), Ok(125.0));
        assert_eq!(controller.params().delay_ms, 125.0);
        assert_eq!(controller.echo().value(ParamField::Delay), Some("125ms"));
    }

    #[test]
    fn test_set_parameter_clamps() {
        let mut controller = Controller::seeded(1, 0.0);
        assert_eq!(controller.set_parameter(ParamField::HueRange, 9_000.0), Ok(360.0));
        assert_eq!(controller.set_parameter(ParamField::Depth, 3.4), Ok(3.0));
        assert_eq!(controller.params().depth, 3);
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let mut controller = Controller::seeded(1, 0.0);
        let before = *controller.params();

        let err = controller.set_parameter_text(ParamField::ShrinkFactor, "abc").unwrap_err();
        assert!(matches!(err, ControlError::NotNumeric { field: ParamField::ShrinkFactor, .. }));
        assert_eq!(
            controller.set_parameter(ParamField::Spacing, f64::NAN),
            Err(ControlError::NonFinite { field: ParamField::Spacing })
        );
        assert_eq!(
            controller.set_parameter_named("gravity", "1"),
            Err(ControlError::UnknownParameter("gravity".to_string()))
        );
        assert_eq!(*controller.params(), before);
    }

    #[test]
    fn test_text_input_is_trimmed() {
        let mut controller = Controller::seeded(1, 0.0);
        assert_eq!(controller.set_parameter_named("wobble", " 0.4 "), Ok(0.4));
        assert_eq!(controller.echo().value(ParamField::WobbleStrength), Some("0.40"));
    }

    #[test]
    fn test_select_type_resets_clock() {
        let mut controller = Controller::seeded(3, 0.0);
        assert!(controller.select_type("ripple", 900.0));
        assert_eq!(controller.state().active_type(), "ripple");
        assert_eq!(controller.state().animation_start(), 900.0);
        assert_eq!(controller.echo().type_label(), "Ripple Layers");
    }

    #[test]
    fn test_select_unknown_type_changes_nothing() {
        let mut controller = Controller::seeded(3, 0.0);
        let before = controller.state().clone();
        assert!(!controller.select_type("nope", 500.0));
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn test_reset_keeps_params_and_type() {
        let mut controller = Controller::seeded(9, 0.0);
        controller.select_type("comet", 10.0);
        let params = *controller.params();
        controller.reset_clock_and_hue(2_000.0);
        assert_eq!(*controller.params(), params);
        assert_eq!(controller.state().active_type(), "comet");
        assert_eq!(controller.state().animation_start(), 2_000.0);
    }

    #[test]
    fn test_seeded_controllers_agree() {
        let mut a = Controller::seeded(42, 0.0);
        let mut b = Controller::seeded(42, 0.0);
        a.randomize(10.0);
        b.randomize(10.0);
        assert_eq!(a.state(), b.state());
    }
}
