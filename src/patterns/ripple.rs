//! Expanding radial wavefronts.

use super::{PatternBuffer, PatternInput, PatternParams, MIN_HEX_SIZE};
use crate::color::Hsla;
use std::f64::consts::PI;

/// Lower bound on the branch delay used for the wave period.
const MIN_DELAY_MS: f64 = 0.1;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let time = input.time;
    let ripples = input.depth.max(3);
    let period = params.delay_ms.max(MIN_DELAY_MS) * 10.0;

    for r in 0..ripples {
        let ripple = r as f64;
        let phase = time / period + ripple * 0.3;
        let wave = phase.rem_euclid(1.0) * params.spacing_factor;
        let radius = size * (0.8 + wave * 2.1 + ripple * 0.22);
        let nodes = 10 + r * 2;
        let hue = input.hue_base + ripple * (params.hue_range / ripples as f64);
        let alpha = (0.9 - wave * 0.6).max(0.2);
        let local_size = (size * 0.24 * (1.0 - wave * 0.4)).max(MIN_HEX_SIZE);
        let fill = Hsla::new(hue + params.hue_range / 14.0, 68.0, 28.0, alpha * 0.4);

        for n in 0..nodes {
            let node = n as f64;
            let angle = (PI * 2.0 * node) / nodes as f64
                + wave * PI
                + (time * 0.001 + node).sin() * params.wobble_strength * 0.3;
            let spin = time * speed * 0.3 + angle * 0.6;
            let stroke = Hsla::new(hue + node * (params.hue_range / (nodes as f64 * 3.0)), 82.0, 72.0, alpha);

            if !out.hexagon(input.center.offset(angle, radius), local_size, spin, stroke, fill) {
                return;
            }
        }
    }
}
