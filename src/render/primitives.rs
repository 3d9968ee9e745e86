//! Hexagon and polyline drawers.

use super::surface::DrawingSurface;
use crate::patterns::{DrawCommand, LineCommand, Point, Primitive};
use std::f64::consts::PI;

/// Vertices of a hexagon with circumradius `size`, starting at `rotation`.
pub fn hexagon_vertices(center: Point, size: f64, rotation: f64) -> [Point; 6] {
    let mut vertices = [center; 6];
    for (k, vertex) in vertices.iter_mut().enumerate() {
        *vertex = center.offset(rotation + (PI / 3.0) * k as f64, size);
    }
    vertices
}

/// Stroke width used for a hexagon of the given size.
pub fn hexagon_stroke_width(size: f64) -> f64 {
    (size * 0.02).max(1.2)
}

/// Draw one hexagon: fill first, then stroke, each only if a color is given.
pub fn draw_hexagon<S: DrawingSurface + ?Sized>(surface: &mut S, cmd: &DrawCommand) {
    let vertices = hexagon_vertices(cmd.center, cmd.size, cmd.rotation);

    surface.save();
    surface.begin_path();
    surface.move_to(vertices[0]);
    for &vertex in &vertices[1..] {
        surface.line_to(vertex);
    }
    surface.close_path();
    if let Some(fill) = cmd.fill {
        surface.fill(fill.to_rgba());
    }
    if let Some(stroke) = cmd.stroke {
        surface.stroke(stroke.to_rgba(), hexagon_stroke_width(cmd.size));
    }
    surface.restore();
}

/// Stroke an open polyline.
pub fn draw_line<S: DrawingSurface + ?Sized>(surface: &mut S, cmd: &LineCommand) {
    let Some((first, rest)) = cmd.points.split_first() else {
        return;
    };

    surface.save();
    surface.begin_path();
    surface.move_to(*first);
    for &point in rest {
        surface.line_to(point);
    }
    surface.stroke(cmd.color.to_rgba(), cmd.width);
    surface.restore();
}

pub fn draw_primitive<S: DrawingSurface + ?Sized>(surface: &mut S, primitive: &Primitive) {
    match primitive {
        Primitive::Hexagon(cmd) => draw_hexagon(surface, cmd),
        Primitive::Line(cmd) => draw_line(surface, cmd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsla;
    use crate::render::recording::{RecordingSurface, SurfaceOp};

    fn command(size: f64, stroke: bool, fill: bool) -> DrawCommand {
        let color = Hsla::new(200.0, 80.0, 70.0, 0.9);
        DrawCommand {
            center: Point::new(10.0, 20.0),
            size,
            rotation: 0.25,
            stroke: stroke.then_some(color),
            fill: fill.then_some(color),
        }
    }

    #[test]
    fn test_vertices_on_circumradius() {
        let center = Point::new(5.0, -5.0);
        let vertices = hexagon_vertices(center, 10.0, 0.3);
        for (k, v) in vertices.iter().enumerate() {
            assert!((v.distance(&center) - 10.0).abs() < 1e-9);
            let angle = (v.y - center.y).atan2(v.x - center.x);
            let expected = 0.3 + (PI / 3.0) * k as f64;
            let diff = (angle - expected).rem_euclid(2.0 * PI);
            assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9);
        }
    }

    #[test]
    fn test_stroke_width_floor() {
        assert_eq!(hexagon_stroke_width(10.0), 1.2);
        assert_eq!(hexagon_stroke_width(100.0), 2.0);
    }

    #[test]
    fn test_draw_hexagon_op_sequence() {
        let mut surface = RecordingSurface::new();
        draw_hexagon(&mut surface, &command(100.0, true, true));

        let ops = surface.ops();
        assert_eq!(ops.len(), 12);
        assert_eq!(ops[0], SurfaceOp::Save);
        assert_eq!(ops[1], SurfaceOp::BeginPath);
        assert!(matches!(ops[2], SurfaceOp::MoveTo(_)));
        assert_eq!(ops[3..8].iter().filter(|op| matches!(op, SurfaceOp::LineTo(_))).count(), 5);
        assert_eq!(ops[8], SurfaceOp::ClosePath);
        assert!(matches!(ops[9], SurfaceOp::Fill(_)));
        assert!(matches!(ops[10], SurfaceOp::Stroke { width, .. } if width == 2.0));
        assert_eq!(ops[11], SurfaceOp::Restore);
    }

    #[test]
    fn test_missing_colors_skip_paint() {
        let mut surface = RecordingSurface::new();
        draw_hexagon(&mut surface, &command(50.0, false, false));
        assert!(!surface.ops().iter().any(|op| matches!(op, SurfaceOp::Fill(_) | SurfaceOp::Stroke { .. })));
    }

    #[test]
    fn test_zero_size_hexagon_is_harmless() {
        let mut surface = RecordingSurface::new();
        draw_hexagon(&mut surface, &command(0.0, true, true));
        assert_eq!(surface.ops().len(), 12);
    }

    #[test]
    fn test_empty_line_draws_nothing() {
        let mut surface = RecordingSurface::new();
        let line = LineCommand {
            points: Vec::new(),
            width: 2.0,
            color: Hsla::new(0.0, 0.0, 0.0, 1.0),
        };
        draw_line(&mut surface, &line);
        assert!(surface.ops().is_empty());
    }
}
