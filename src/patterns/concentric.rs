//! Nested same-center hexagons with orbiting satellite rings.

use super::{PatternBuffer, PatternInput, PatternParams};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let time = input.time;
    let layers = input.depth.max(4);

    for i in 0..layers {
        let layer = i as f64;
        let factor = params.shrink_factor.powf(layer * 0.65);
        let layer_size = (size * factor).max(5.0);
        let rotation = (time + params.delay_ms * layer * 0.6) * speed * (1.0 + layer * 0.08) + layer * 0.45;
        let hue = input.hue_base + layer * (params.hue_range / 9.0);
        let stroke = Hsla::new(hue, 88.0, 72.0, 0.92);
        let fill = Hsla::new(hue + params.hue_range / 12.0, 70.0, 25.0, 0.22 + layer * 0.04);

        if !out.hexagon(input.center, layer_size, rotation, stroke, fill) {
            return;
        }
    }

    let orbit_count = ((layers as f64 / 2.0).round() as u32).max(3);
    for j in 0..orbit_count {
        let orbit = j as f64;
        let radius = size * params.spacing_factor * (0.6 + orbit * 0.7);
        let nodes = 6 + j * 2;
        let size_scale = (1.0 - orbit * 0.18).max(0.4);
        let child_size = (size * 0.35 * size_scale).max(3.0);

        for n in 0..nodes {
            let node = n as f64;
            let base_angle = (PI * 2.0 * node) / nodes as f64;
            let rotation = (time + params.delay_ms * (orbit + node * 0.2)) * speed * (0.35 + orbit * 0.12)
                + base_angle
                + params.wobble_strength * (time * 0.001 + node).sin();
            let hue = input.hue_base + orbit * (params.hue_range / 6.0) + node * (params.hue_range / 80.0);
            let stroke = Hsla::new(hue, 80.0, 76.0, 0.85);
            let fill = Hsla::new(hue + 10.0, 72.0, 38.0, 0.18);

            if !out.hexagon(input.center.offset(rotation, radius), child_size, rotation, stroke, fill) {
                return;
            }
        }
    }
}
