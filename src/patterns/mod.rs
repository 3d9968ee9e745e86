//! Hexagon pattern system.
//!
//! Provides the animated structural layouts:
//! - Fractal: Recursive hexagon clusters
//! - Spiral: A single swept arm
//! - Concentric: Nested rings with orbiting satellites
//! - Orbital: Central hexagon with radial satellite rings
//! - Pendulum: Recursive two-armed swinging structure
//! - Aurora: Horizontal waving bands
//! - Comet: Fading spiral tail
//! - Prism: Offset grid attenuated by distance
//! - Bloom: Radial petal rings
//! - Ripple: Expanding wavefronts
//!
//! Every algorithm is a pure function of its [`PatternInput`] and
//! [`PatternParams`]; output goes to a [`PatternBuffer`].

mod aurora;
mod bloom;
mod comet;
mod concentric;
mod fractal;
mod orbital;
pub mod params;
mod pendulum;
mod prism;
pub mod registry;
mod ripple;
mod spiral;

pub use params::{ParamBounds, ParamBoundsTable, ParamField, PatternParams};
pub use registry::{PatternDescriptor, PatternRegistry};

use crate::color::Hsla;
use serde::{Deserialize, Serialize};

/// Smallest hexagon size any algorithm emits.
pub const MIN_HEX_SIZE: f64 = 3.0;

/// Default cap on primitives emitted per pass.
pub const DEFAULT_MAX_PRIMITIVES: usize = 100_000;

/// Default hard cap on depth.
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// A point in canvas (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away along `angle` (radians).
    #[inline]
    pub fn offset(&self, angle: f64, radius: f64) -> Self {
        Self::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Per-frame inputs shared by every algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternInput {
    pub center: Point,
    /// Circumradius of the outermost/base hexagon.
    pub base_size: f64,
    pub depth: u32,
    /// Animation timestamp in milliseconds.
    pub time: f64,
    /// Rolling hue offset in degrees.
    pub hue_base: f64,
}

/// One hexagon to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub center: Point,
    /// Circumradius.
    pub size: f64,
    /// Rotation offset in radians.
    pub rotation: f64,
    pub stroke: Option<Hsla>,
    pub fill: Option<Hsla>,
}

/// A stroked polyline (pendulum arms).
#[derive(Debug, Clone, PartialEq)]
pub struct LineCommand {
    pub points: Vec<Point>,
    pub width: f64,
    pub color: Hsla,
}

/// Anything a pattern emits.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Hexagon(DrawCommand),
    Line(LineCommand),
}

impl Primitive {
    pub fn as_hexagon(&self) -> Option<&DrawCommand> {
        match self {
            Self::Hexagon(cmd) => Some(cmd),
            Self::Line(_) => None,
        }
    }
}

/// Work limits for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternLimits {
    /// Primitives accepted before the buffer reports exhaustion.
    pub max_primitives: usize,
    /// Depth values above this are capped.
    pub max_depth: u32,
}

impl Default for PatternLimits {
    fn default() -> Self {
        Self {
            max_primitives: DEFAULT_MAX_PRIMITIVES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Bounded sink that collects primitives for one pass.
#[derive(Debug, Clone)]
pub struct PatternBuffer {
    primitives: Vec<Primitive>,
    limits: PatternLimits,
    exhausted: bool,
    /// Survives `clear`, so a reused buffer warns once per run of truncated frames.
    budget_reported: bool,
}

impl PatternBuffer {
    pub fn new(limits: PatternLimits) -> Self {
        Self {
            primitives: Vec::new(),
            limits,
            exhausted: false,
            budget_reported: false,
        }
    }

    pub fn limits(&self) -> PatternLimits {
        self.limits
    }

    /// True once the primitive budget has been hit.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// True while consecutive generations keep hitting the budget and the
    /// first of them has already been logged.
    pub fn budget_reported(&self) -> bool {
        self.budget_reported
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    pub fn hexagons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.primitives.iter().filter_map(Primitive::as_hexagon)
    }

    /// Drop collected primitives but keep the allocation and limits.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.exhausted = false;
    }

    fn accept(&mut self) -> bool {
        if self.primitives.len() >= self.limits.max_primitives {
            self.exhausted = true;
        }
        !self.exhausted
    }

    /// Emit a hexagon with stroke and fill. Sizes below [`MIN_HEX_SIZE`] are clamped.
    pub fn hexagon(&mut self, center: Point, size: f64, rotation: f64, stroke: Hsla, fill: Hsla) -> bool {
        if !self.accept() {
            return false;
        }
        self.primitives.push(Primitive::Hexagon(DrawCommand {
            center,
            size: size.max(MIN_HEX_SIZE),
            rotation,
            stroke: Some(stroke),
            fill: Some(fill),
        }));
        true
    }

    pub fn line(&mut self, points: Vec<Point>, width: f64, color: Hsla) -> bool {
        if !self.accept() {
            return false;
        }
        self.primitives.push(Primitive::Line(LineCommand { points, width, color }));
        true
    }
}

impl Default for PatternBuffer {
    fn default() -> Self {
        Self::new(PatternLimits::default())
    }
}

/// The closed set of structural drawing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Fractal,
    Spiral,
    Concentric,
    Orbital,
    Pendulum,
    Aurora,
    Comet,
    Prism,
    Bloom,
    Ripple,
}

impl Algorithm {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fractal" => Some(Self::Fractal),
            "spiral" => Some(Self::Spiral),
            "concentric" => Some(Self::Concentric),
            "orbital" => Some(Self::Orbital),
            "pendulum" => Some(Self::Pendulum),
            "aurora" => Some(Self::Aurora),
            "comet" => Some(Self::Comet),
            "prism" => Some(Self::Prism),
            "bloom" => Some(Self::Bloom),
            "ripple" => Some(Self::Ripple),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fractal => "fractal",
            Self::Spiral => "spiral",
            Self::Concentric => "concentric",
            Self::Orbital => "orbital",
            Self::Pendulum => "pendulum",
            Self::Aurora => "aurora",
            Self::Comet => "comet",
            Self::Prism => "prism",
            Self::Bloom => "bloom",
            Self::Ripple => "ripple",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Fractal,
            Self::Spiral,
            Self::Concentric,
            Self::Orbital,
            Self::Pendulum,
            Self::Aurora,
            Self::Comet,
            Self::Prism,
            Self::Bloom,
            Self::Ripple,
        ]
    }

    /// Run the algorithm, appending to `out`.
    ///
    /// Emits nothing for a non-positive or non-finite base size, or zero depth.
    pub fn generate(self, input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
        if !input.base_size.is_finite() || input.base_size <= 0.0 || input.depth == 0 {
            return;
        }
        let input = PatternInput {
            depth: input.depth.min(out.limits().max_depth),
            ..*input
        };

        match self {
            Self::Fractal => fractal::draw(&input, params, out),
            Self::Spiral => spiral::draw(&input, params, out),
            Self::Concentric => concentric::draw(&input, params, out),
            Self::Orbital => orbital::draw(&input, params, out),
            Self::Pendulum => pendulum::draw(&input, params, out),
            Self::Aurora => aurora::draw(&input, params, out),
            Self::Comet => comet::draw(&input, params, out),
            Self::Prism => prism::draw(&input, params, out),
            Self::Bloom => bloom::draw(&input, params, out),
            Self::Ripple => ripple::draw(&input, params, out),
        }

        if !out.exhausted {
            out.budget_reported = false;
        } else if out.budget_reported {
            log::trace!("{} pattern still truncated at the primitive budget", self.name());
        } else {
            out.budget_reported = true;
            log::warn!(
                "{} pattern hit the primitive budget of {}",
                self.name(),
                out.limits().max_primitives
            );
        }
    }
}

/// Generate a pattern with default limits.
pub fn generate(algorithm: Algorithm, input: &PatternInput, params: &PatternParams) -> Vec<Primitive> {
    let mut out = PatternBuffer::default();
    algorithm.generate(input, params, &mut out);
    out.into_primitives()
}
