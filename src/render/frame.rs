//! Per-frame renderer.
//!
//! One pass fades the previous frame, derives the base size and hue from the
//! viewport and clock, runs the active pattern, draws its primitives, and
//! re-arms the scheduler.

use super::primitives::draw_primitive;
use super::surface::{DrawingSurface, Transform};
use crate::color::{parse_hex_color, with_alpha};
use crate::control::RenderState;
use crate::patterns::{
    Algorithm, PatternBuffer, PatternInput, PatternLimits, PatternRegistry, Point, Primitive,
};
use crate::schedule::FrameScheduler;

/// Visible drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio: if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 },
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).round() as u32,
            (self.height * self.device_pixel_ratio).round() as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Tunables for the frame renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Overlay painted over the previous frame each pass.
    pub fade_color: [f32; 4],
    /// Base hexagon size as a fraction of the smaller viewport side.
    pub size_ratio: f64,
    /// Hue advance in degrees per elapsed millisecond.
    pub hue_drift_per_ms: f64,
    pub limits: PatternLimits,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fade_color: with_alpha(parse_hex_color("#0c0f1a").unwrap_or([0.0; 3]), 0.22),
            size_ratio: 0.19,
            hue_drift_per_ms: 0.02,
            limits: PatternLimits::default(),
        }
    }
}

/// What one pass produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub algorithm: Algorithm,
    pub primitives: usize,
    pub hexagons: usize,
    /// True when the primitive budget cut the pattern short.
    pub truncated: bool,
    pub base_size: f64,
    pub hue_base: f64,
}

pub struct FrameRenderer {
    settings: RenderSettings,
    buffer: PatternBuffer,
    /// Unknown key the fallback was last reported for.
    fallback_reported: Option<String>,
}

impl FrameRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            buffer: PatternBuffer::new(settings.limits),
            fallback_reported: None,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Primitives drawn by the most recent pass.
    pub fn last_primitives(&self) -> &[Primitive] {
        self.buffer.primitives()
    }

    /// Resize the backing store and reset the transform to the pixel ratio.
    pub fn apply_viewport<S: DrawingSurface + ?Sized>(&self, viewport: &Viewport, surface: &mut S) {
        let (width, height) = viewport.backing_size();
        surface.resize(width, height);
        surface.set_transform(Transform::identity());
        surface.scale(viewport.device_pixel_ratio, viewport.device_pixel_ratio);
    }

    /// Pick the algorithm for `key`, falling back to the fractal.
    pub fn resolve_algorithm(registry: &PatternRegistry, key: &str) -> Algorithm {
        registry
            .lookup(key)
            .map_or(Algorithm::Fractal, |descriptor| descriptor.algorithm)
    }

    /// Unknown pattern key currently being rendered as the fractal, if any.
    pub fn fallback_key(&self) -> Option<&str> {
        self.fallback_reported.as_deref()
    }

    fn algorithm_for(&mut self, registry: &PatternRegistry, key: &str) -> Algorithm {
        if registry.lookup(key).is_some() {
            self.fallback_reported = None;
        } else if self.fallback_reported.as_deref() == Some(key) {
            log::trace!("Rendering unknown pattern type '{}' as fractal", key);
        } else {
            log::warn!("Unknown pattern type '{}', falling back to fractal", key);
            self.fallback_reported = Some(key.to_string());
        }
        Self::resolve_algorithm(registry, key)
    }

    /// Run one rendering pass at timestamp `time` (milliseconds).
    pub fn render<S: DrawingSurface + ?Sized>(
        &mut self,
        state: &RenderState,
        registry: &PatternRegistry,
        viewport: &Viewport,
        time: f64,
        surface: &mut S,
    ) -> FrameStats {
        surface.fill_rect(0.0, 0.0, viewport.width, viewport.height, self.settings.fade_color);

        let base_size = viewport.width.min(viewport.height) * self.settings.size_ratio;
        let hue_base = state.hue_seed() + (time - state.animation_start()) * self.settings.hue_drift_per_ms;
        let algorithm = self.algorithm_for(registry, state.active_type());
        let params = state.params();

        let input = PatternInput {
            center: viewport.center(),
            base_size,
            depth: params.depth,
            time,
            hue_base,
        };
        self.buffer.clear();
        algorithm.generate(&input, params, &mut self.buffer);

        surface.save();
        for primitive in self.buffer.primitives() {
            draw_primitive(surface, primitive);
        }
        surface.restore();

        let stats = FrameStats {
            algorithm,
            primitives: self.buffer.len(),
            hexagons: self.buffer.hexagons().count(),
            truncated: self.buffer.is_exhausted(),
            base_size,
            hue_base,
        };
        log::trace!(
            "frame t={:.1} {} primitives={} truncated={}",
            time,
            algorithm.name(),
            stats.primitives,
            stats.truncated
        );
        stats
    }

    /// Render one pass, then arm the next frame.
    pub fn tick<S, F>(
        &mut self,
        state: &RenderState,
        registry: &PatternRegistry,
        viewport: &Viewport,
        time: f64,
        surface: &mut S,
        scheduler: &mut F,
    ) -> FrameStats
    where
        S: DrawingSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let stats = self.render(state, registry, viewport, time, surface);
        scheduler.schedule_next();
        stats
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}
