//! Rings of petal hexagons arranged radially.

use super::{PatternBuffer, PatternInput, PatternParams, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let time = input.time;
    let rings = (input.depth + 1).max(4);

    for r in 0..rings {
        let ring = r as f64;
        let progress = ring / rings as f64;
        let ring_radius = size * (0.5 + params.spacing_factor * progress * 1.4 + (time * 0.001 + ring).sin() * 0.08);
        let petals = 6 + r * 2;
        let petal_size = (size * params.shrink_factor.powf(ring * 0.7)).max(MIN_HEX_SIZE);
        let hue = input.hue_base + progress * params.hue_range;
        let wobble = (time * 0.0014 + ring).sin() * params.wobble_strength;
        let fill = Hsla::new(hue + params.hue_range / 20.0, 70.0, 32.0, 0.2 + progress * 0.12);

        for p in 0..petals {
            let petal = p as f64;
            let angle = (PI * 2.0 * petal) / petals as f64 + wobble * 0.6;
            let rotation = time * speed * 0.5 + angle;
            let stroke = Hsla::new(hue + petal * (params.hue_range / (petals as f64 * 2.0)), 86.0, 74.0, 0.88);

            if !out.hexagon(input.center.offset(angle, ring_radius), petal_size, rotation, stroke, fill) {
                return;
            }
        }
    }
}
