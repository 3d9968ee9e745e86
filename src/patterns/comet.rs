//! Spiral tail of fading, shrinking hexagons.

use super::{PatternBuffer, PatternInput, PatternParams, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let depth = input.depth as f64;
    let tail_length = (input.depth as usize * 6).max(12);
    let angle_base = input.time * speed * 1.1;

    for i in 0..tail_length {
        let progress = i as f64 / tail_length as f64;
        let spiral = angle_base + progress * PI * 3.2;
        let wobble = (input.time * 0.0016 + i as f64 * 0.7).sin() * params.wobble_strength;
        let radius = size * (0.4 + params.spacing_factor * progress * 2.1);
        let local_size =
            (size * (1.0 - progress * 0.82) * params.shrink_factor.powf(progress * depth)).max(MIN_HEX_SIZE);
        let hue = input.hue_base + progress * params.hue_range;
        let opacity = 0.9 - progress * 0.65;
        let stroke = Hsla::new(hue, 84.0, 70.0, opacity);
        let fill = Hsla::new(hue + params.hue_range / 18.0, 70.0, 32.0, opacity * 0.4);

        let center = input.center.offset(spiral + wobble, radius);
        if !out.hexagon(center, local_size, spiral + wobble * 0.8, stroke, fill) {
            return;
        }
    }
}
