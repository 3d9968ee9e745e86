//! Recursive hexagon fractal.
//!
//! Each node draws one hexagon and spawns six children around its edges,
//! shrinking by `shrink_factor` per level.

use super::{PatternBuffer, PatternInput, PatternParams, Point};
use crate::color::Hsla;
use std::f64::consts::PI;

/// Nodes smaller than this stop recursing.
const MIN_NODE_SIZE: f64 = 4.0;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    node(out, params, input.center, input.base_size, input.depth, input.time, input.hue_base);
}

fn node(
    out: &mut PatternBuffer,
    params: &PatternParams,
    center: Point,
    size: f64,
    depth: u32,
    time: f64,
    hue_base: f64,
) {
    if size < MIN_NODE_SIZE || depth == 0 || out.is_exhausted() {
        return;
    }

    let level = depth as f64;
    let wobble = (time * 0.001 + level).sin() * params.wobble_strength;
    let rotation = wobble + (time * params.rotation_speed_rad_per_ms() + level * 0.3);
    let hue = hue_base + level * (params.hue_range / 10.0) + wobble * (params.hue_range / 6.0);
    let stroke = Hsla::new(hue, 80.0, 70.0, 0.9);
    let fill = Hsla::new(hue + params.hue_range / 9.0, 70.0, 30.0, 0.35);

    if !out.hexagon(center, size, rotation, stroke, fill) {
        return;
    }

    let next_size = size * params.shrink_factor;
    let radius = size * params.spacing_factor;

    for i in 0..6 {
        let angle = rotation + (PI / 3.0) * i as f64;
        node(
            out,
            params,
            center.offset(angle, radius),
            next_size,
            depth - 1,
            time + i as f64 * params.delay_ms,
            hue_base + params.hue_range / 18.0,
        );
    }
}
