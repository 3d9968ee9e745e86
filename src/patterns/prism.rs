//! Offset hexagon grid attenuated by distance from the center.

use super::{PatternBuffer, PatternInput, PatternParams, Point, MIN_HEX_SIZE};
use crate::color::Hsla;

pub(super) fn draw(input: &PatternInput, params: &PatternParams, out: &mut PatternBuffer) {
    let speed = params.rotation_speed_rad_per_ms();
    let size = input.base_size;
    let grid = input.depth.saturating_sub(2).max(2) as i32;
    let spacing = size * 0.38 * params.spacing_factor;
    let hue_step = params.hue_range / (grid as f64 * 3.0 + 4.0);

    for row in -grid..=grid {
        for col in -grid..=grid {
            let row_shift = if row % 2 == 0 { 0.0 } else { 0.5 };
            let offset_x = (col as f64 + row_shift) * spacing * 1.2;
            let offset_y = row as f64 * spacing * 0.9;
            let distance = (offset_x.powi(2) + offset_y.powi(2)).sqrt();
            let tilt = input.time * speed * 0.4 + (row + col) as f64 * 0.18;
            let hue = input.hue_base + (row - col) as f64 * hue_step;
            let intensity = (1.0 - distance / (size * 2.4)).max(0.25);
            let local_size = (size * 0.28 * intensity).max(MIN_HEX_SIZE);
            let stroke = Hsla::new(hue, 82.0, 74.0, 0.8 * intensity + 0.2);
            let fill = Hsla::new(hue + params.hue_range / 16.0, 68.0, 28.0, 0.16 + intensity * 0.2);

            let center = Point::new(input.center.x + offset_x, input.center.y + offset_y);
            if !out.hexagon(center, local_size, tilt, stroke, fill) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Algorithm;

    fn count_for_depth(depth: u32) -> usize {
        let input = PatternInput {
            center: Point::new(0.0, 0.0),
            base_size: 100.0,
            depth,
            time: 0.0,
            hue_base: 0.0,
        };
        let mut out = PatternBuffer::default();
        Algorithm::Prism.generate(&input, &PatternParams::default(), &mut out);
        out.len()
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(count_for_depth(9), 15 * 15);
        assert_eq!(count_for_depth(5), 7 * 7);
        // shallow depths keep the minimum half-width of 2
        assert_eq!(count_for_depth(1), 5 * 5);
        assert_eq!(count_for_depth(4), 5 * 5);
    }

    #[test]
    fn test_center_cell_is_largest() {
        let input = PatternInput {
            center: Point::new(10.0, 10.0),
            base_size: 100.0,
            depth: 6,
            time: 0.0,
            hue_base: 0.0,
        };
        let mut out = PatternBuffer::default();
        Algorithm::Prism.generate(&input, &PatternParams::default(), &mut out);
        let hexes: Vec<_> = out.hexagons().collect();
        let center = hexes.iter().find(|h| h.center == Point::new(10.0, 10.0)).copied();
        let center = center.expect("grid has a center cell");
        assert!((center.size - 28.0).abs() < 1e-9);
        assert!(hexes.iter().all(|h| h.size <= center.size));
    }
}
