//! Recursive two-armed pendulum.
//!
//! Every node swings left and right arms; each arm is drawn as a polyline with
//! a connector hexagon at its midpoint and a child node at its end.

use super::{PatternBuffer, PatternInput, PatternParams, Point, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

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
    if depth == 0 || size < MIN_HEX_SIZE || out.is_exhausted() {
        return;
    }

    let level = depth as f64;
    let speed = params.rotation_speed_rad_per_ms();
    let swing = (time * speed * 1.3 + level * 0.35).sin() * (0.9 + params.wobble_strength * 0.9);
    let angle_base = PI / 2.0 + swing;
    let hue = hue_base + level * (params.hue_range / 12.0) + swing * (params.hue_range / 7.0);
    let stroke = Hsla::new(hue, 86.0, 74.0, 0.92);
    let fill = Hsla::new(hue + params.hue_range / 16.0, 68.0, 32.0, 0.24);

    if !out.hexagon(center, size, angle_base * 0.35, stroke, fill) {
        return;
    }

    let arm_length = size * params.spacing_factor * 1.5;
    let child_size = size * params.shrink_factor;
    let connector_size = (size * 0.45).max(MIN_HEX_SIZE);

    for (index, direction) in [-1.0_f64, 1.0].into_iter().enumerate() {
        let phase = time + params.delay_ms * (index as f64 + 0.5);
        let wobble = (phase * 0.001 + level * 0.2).sin() * params.wobble_strength;
        let arm_angle = angle_base + direction * (PI / 7.0 + wobble * 0.6);
        let mid = center.offset(arm_angle, arm_length * 0.55);
        let end = center.offset(arm_angle, arm_length);

        let arm_color = Hsla::new(hue + direction * 6.0, 70.0, 78.0, 0.85);
        if !out.line(vec![center, mid, end], (size * 0.06).max(1.6), arm_color) {
            return;
        }
        if !out.hexagon(mid, connector_size, arm_angle + wobble * 0.5, stroke, fill) {
            return;
        }
        node(out, params, end, child_size, depth - 1, phase, hue_base + params.hue_range / 14.0);
    }
}
