//! Single swept spiral arm.

use super::{PatternBuffer, PatternInput, PatternParams};
use crate::color::Hsla;
use std::f64::consts::PI;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let depth = input.depth as f64;
    let size = input.base_size;
    let steps = (input.depth as usize * 8).max(16);

    for i in 0..steps {
        let progress = i as f64 / steps as f64;
        let local_time = input.time + params.delay_ms * progress * 0.8;
        let wobble = (local_time * 0.001 + i as f64 * 0.6).sin() * params.wobble_strength;
        let angle = local_time * speed * 0.6 + progress * PI * 3.0 + wobble * 0.8;
        let radius = size * (0.6 + params.spacing_factor * progress * 2.4);
        let local_size = (size * params.shrink_factor.powf(progress * depth)).max(4.0);
        let hue = input.hue_base + progress * params.hue_range + wobble * (params.hue_range / 4.0);
        let stroke = Hsla::new(hue, 82.0, 68.0, 0.9);
        let fill = Hsla::new(hue + params.hue_range / 12.0, 70.0, 28.0, 0.3);

        if !out.hexagon(input.center.offset(angle, radius), local_size, angle + wobble, stroke, fill) {
            return;
        }
    }
}
