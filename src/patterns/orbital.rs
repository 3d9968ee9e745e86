//! Central hexagon surrounded by radial satellite rings.

use super::{PatternBuffer, PatternInput, PatternParams, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let time = input.time;
    let rings = (input.depth + 1).max(3);

    let core_stroke = Hsla::new(input.hue_base, 85.0, 74.0, 0.9);
    let core_fill = Hsla::new(input.hue_base + params.hue_range / 10.0, 70.0, 24.0, 0.26);
    let core_rotation = (time + params.delay_ms * 0.8) * speed * 0.8;
    if !out.hexagon(input.center, (size * 0.8).max(MIN_HEX_SIZE), core_rotation, core_stroke, core_fill) {
        return;
    }

    for r in 1..=rings {
        let ring = r as f64;
        let radius = size * params.spacing_factor * (0.8 + ring * 0.65);
        let count = 6 + r * 3;
        let local_size = (size * params.shrink_factor.powi(r as i32)).max(MIN_HEX_SIZE);

        for i in 0..count {
            let slot = i as f64;
            let angle = (PI * 2.0 * slot) / count as f64;
            let rotation = (time + params.delay_ms * (ring + slot * 0.1)) * speed * (0.45 + ring * 0.14)
                + angle
                + params.wobble_strength * (time * 0.0015 + slot).sin();
            let hue = input.hue_base + ring * (params.hue_range / 8.0) + slot * (params.hue_range / 90.0);
            let stroke = Hsla::new(hue, 78.0, 72.0, 0.88);
            let fill = Hsla::new(hue + params.hue_range / 14.0, 70.0, 28.0, 0.18);

            if !out.hexagon(input.center.offset(rotation, radius), local_size, rotation, stroke, fill) {
                return;
            }
        }
    }
}
