//! Shared test fixtures for pattern tests.
#![allow(dead_code)]

use hexfractal::patterns::{
    Algorithm, PatternBuffer, PatternInput, PatternLimits, PatternParams, Point, Primitive,
};

/// The canonical type keys in display order.
pub const EXPECTED_KEYS: [&str; 10] = [
    "classic",
    "spiral",
    "concentric",
    "lattice",
    "pendulum",
    "aurora",
    "comet",
    "prism",
    "bloom",
    "ripple",
];

/// Parameters of the reference fractal scenario.
pub fn scenario_params() -> PatternParams {
    PatternParams {
        depth: 5,
        rotation_speed_deg: 12.0,
        shrink_factor: 0.55,
        spacing_factor: 1.12,
        wobble_strength: 0.2,
        delay_ms: 80.0,
        hue_range: 240.0,
    }
}

/// Reference input at the origin with base size 100.
pub fn origin_input(depth: u32) -> PatternInput {
    PatternInput {
        center: Point::new(0.0, 0.0),
        base_size: 100.0,
        depth,
        time: 0.0,
        hue_base: 0.0,
    }
}

/// A mid-animation input on a 960x640 viewport.
pub fn animated_input(depth: u32, time: f64) -> PatternInput {
    PatternInput {
        center: Point::new(480.0, 320.0),
        base_size: 121.6,
        depth,
        time,
        hue_base: 137.0,
    }
}

/// Run `algorithm` into a fresh buffer with `limits`.
pub fn run_with_limits(
    algorithm: Algorithm,
    input: &PatternInput,
    params: &PatternParams,
    limits: PatternLimits,
) -> PatternBuffer {
    let mut buffer = PatternBuffer::new(limits);
    algorithm.generate(input, params, &mut buffer);
    buffer
}

/// Smallest hexagon size in `primitives`, if any.
pub fn min_hexagon_size(primitives: &[Primitive]) -> Option<f64> {
    primitives
        .iter()
        .filter_map(Primitive::as_hexagon)
        .map(|cmd| cmd.size)
        .reduce(f64::min)
}
