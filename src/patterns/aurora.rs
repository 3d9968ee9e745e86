//! Horizontal bands of hexagons following a sinusoidal sway.

use super::{PatternBuffer, PatternInput, PatternParams, Point, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let time = input.time;
    let depth = input.depth as f64;
    let bands = input.depth.max(3);
    let segments = 6 + input.depth * 2;

    for i in 0..bands {
        let band = i as f64;
        let band_offset = (band - (bands as f64 - 1.0) / 2.0) * size * 0.35;
        let wave = (time * 0.0012 + band * 0.8).sin() * size * params.wobble_strength * 0.35;
        let band_y = input.center.y + band_offset + wave;
        let band_hue = input.hue_base + band * (params.hue_range / bands as f64);

        for j in 0..=segments {
            let progress = j as f64 / segments as f64;
            let phase = time + params.delay_ms * (progress + band * 0.15);
            let sway = (phase * 0.0014 + progress * PI * 2.0).sin() * params.wobble_strength;
            let x = input.center.x + (progress - 0.5) * size * 2.1;
            let y = band_y + (progress * PI * 2.0 + phase * 0.0009).sin() * size * params.spacing_factor * 0.25;
            let local_size = (size * 0.32 * params.shrink_factor.powf(progress * depth * 0.6)).max(MIN_HEX_SIZE);
            let rotation = phase * speed * 0.45 + sway;
            let stroke = Hsla::new(band_hue + progress * params.hue_range * 0.4, 78.0, 76.0, 0.82);
            let fill = Hsla::new(band_hue + params.hue_range / 14.0, 70.0, 30.0, 0.18 + progress * 0.14);

            if !out.hexagon(Point::new(x, y), local_size, rotation, stroke, fill) {
                return;
            }
        }
    }
}
