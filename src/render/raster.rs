//! Software raster surface backed by a `tiny_skia::Pixmap`.
//!
//! Paths are collected as canvas-style move/line/close calls and handed to
//! tiny-skia for anti-aliased filling and stroking. PNG export goes through
//! the `image` crate.

use super::surface::{DrawingSurface, Transform};
use crate::patterns::Point;
use image::RgbaImage;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke};

/// Canvas default for `miterLimit`.
const MITER_LIMIT: f32 = 10.0;

/// Errors that can occur while exporting a frame.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// CPU drawing surface producing RGBA pixels.
pub struct RasterSurface {
    /// `None` while the backing store has zero area.
    pixmap: Option<Pixmap>,
    background: Color,
    transform: Transform,
    stack: Vec<Transform>,
    path: Vec<PathOp>,
}

impl RasterSurface {
    /// Create a surface cleared to an opaque background.
    pub fn new(width: u32, height: u32, background: [f32; 3]) -> Self {
        let mut surface = Self {
            pixmap: Pixmap::new(width, height),
            background: to_color([background[0], background[1], background[2], 1.0]),
            transform: Transform::identity(),
            stack: Vec::new(),
            path: Vec::new(),
        };
        surface.clear();
        surface
    }

    pub fn width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::width)
    }

    pub fn height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::height)
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.as_ref().map(Pixmap::data).unwrap_or(&[])
    }

    /// Straight RGBA at `(x, y)`; transparent black outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixmap
            .as_ref()
            .and_then(|pixmap| pixmap.pixel(x, y))
            .map(|premultiplied| {
                let c = premultiplied.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .unwrap_or([0; 4])
    }

    /// Copy the frame into a straight-alpha `RgbaImage`.
    pub fn to_image(&self) -> RgbaImage {
        let (width, height) = (self.width(), self.height());
        let data: Vec<u8> = match &self.pixmap {
            Some(pixmap) => pixmap
                .pixels()
                .iter()
                .flat_map(|premultiplied| {
                    let c = premultiplied.demultiply();
                    [c.red(), c.green(), c.blue(), c.alpha()]
                })
                .collect(),
            None => Vec::new(),
        };
        RgbaImage::from_raw(width, height, data).unwrap_or_else(|| RgbaImage::new(width, height))
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(self.background);
        }
    }

    /// Write the current frame as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.to_image().save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for op in &self.path {
            match *op {
                PathOp::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                PathOp::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                PathOp::Close => builder.close(),
            }
        }
        builder.finish()
    }
}

impl DrawingSurface for RasterSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        self.pixmap = Pixmap::new(width, height);
        self.clear();
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform.pre_scale(sx as f32, sy as f32);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.path.push(PathOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        // Without a current point, lineTo behaves like moveTo.
        if self.path.is_empty() {
            self.path.push(PathOp::MoveTo(p));
        } else {
            self.path.push(PathOp::LineTo(p));
        }
    }

    fn close_path(&mut self) {
        if !self.path.is_empty() {
            self.path.push(PathOp::Close);
        }
    }

    fn fill(&mut self, color: [f32; 4]) {
        let Some(path) = self.build_path() else {
            return;
        };
        let paint = paint(color);
        let transform = self.transform;
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }

    fn stroke(&mut self, color: [f32; 4], width: f64) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        let Some(path) = self.build_path() else {
            return;
        };
        let paint = paint(color);
        let stroke = Stroke {
            width: width as f32,
            miter_limit: MITER_LIMIT,
            ..Stroke::default()
        };
        let transform = self.transform;
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [f32; 4]) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        let paint = paint(color);
        let transform = self.transform;
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_rect(rect, &paint, transform, None);
        }
    }
}

fn to_color(color: [f32; 4]) -> Color {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    Color::from_rgba(r, g, b, a).unwrap_or(Color::TRANSPARENT)
}

fn paint(color: [f32; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(color));
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pixel_near(actual: [u8; 4], expected: [u8; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((*a as i16 - *e as i16).abs() <= 2, "{:?} != {:?}", actual, expected);
        }
    }

    fn square(surface: &mut RasterSurface, from: f64, to: f64) {
        surface.begin_path();
        surface.move_to(Point::new(from, from));
        surface.line_to(Point::new(to, from));
        surface.line_to(Point::new(to, to));
        surface.line_to(Point::new(from, to));
        surface.close_path();
    }

    #[test]
    fn test_new_surface_is_background() {
        let surface = RasterSurface::new(4, 3, [1.0, 0.0, 0.0]);
        assert_eq!(surface.pixels().len(), 4 * 3 * 4);
        assert_eq!(surface.pixel(3, 2), [255, 0, 0, 255]);
    }

    #[test]
    fn test_fill_rect_blends_over_background() {
        let mut surface = RasterSurface::new(10, 10, [0.0, 0.0, 0.0]);
        surface.fill_rect(0.0, 0.0, 5.0, 10.0, [1.0, 1.0, 1.0, 0.5]);
        assert_pixel_near(surface.pixel(2, 5), [128, 128, 128, 255]);
        assert_eq!(surface.pixel(7, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_scale_transform_applies_to_rects() {
        let mut surface = RasterSurface::new(10, 10, [0.0, 0.0, 0.0]);
        surface.scale(2.0, 2.0);
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, [0.0, 1.0, 0.0, 1.0]);
        assert_pixel_near(surface.pixel(3, 3), [0, 255, 0, 255]);
        assert_eq!(surface.pixel(4, 4), [0, 0, 0, 255]);
    }

    #[test]
    fn test_save_restore_transform() {
        let mut surface = RasterSurface::new(10, 10, [0.0, 0.0, 0.0]);
        surface.save();
        surface.scale(5.0, 5.0);
        surface.restore();
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, [1.0, 0.0, 0.0, 1.0]);
        assert_pixel_near(surface.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(surface.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_path_fill_covers_interior_only() {
        let mut surface = RasterSurface::new(20, 20, [0.0, 0.0, 0.0]);
        square(&mut surface, 2.0, 12.0);
        surface.fill([0.0, 0.0, 1.0, 1.0]);

        assert_pixel_near(surface.pixel(7, 7), [0, 0, 255, 255]);
        assert_eq!(surface.pixel(15, 15), [0, 0, 0, 255]);
        assert_eq!(surface.pixel(1, 7), [0, 0, 0, 255]);
    }

    #[test]
    fn test_stroke_paints_outline() {
        let mut surface = RasterSurface::new(20, 20, [0.0, 0.0, 0.0]);
        surface.begin_path();
        surface.move_to(Point::new(2.0, 10.0));
        surface.line_to(Point::new(18.0, 10.0));
        surface.stroke([1.0, 1.0, 1.0, 1.0], 2.0);

        assert_pixel_near(surface.pixel(10, 9), [255, 255, 255, 255]);
        assert_pixel_near(surface.pixel(10, 10), [255, 255, 255, 255]);
        assert_eq!(surface.pixel(10, 14), [0, 0, 0, 255]);
    }

    #[test]
    fn test_translucent_stroke_corners_match_edges() {
        let mut surface = RasterSurface::new(40, 40, [0.0, 0.0, 0.0]);
        square(&mut surface, 10.0, 30.0);
        surface.stroke([1.0, 1.0, 1.0, 0.5], 4.0);

        let edge = surface.pixel(20, 10);
        assert_pixel_near(edge, [128, 128, 128, 255]);
        // Where two edges meet the outline is painted once.
        assert_pixel_near(surface.pixel(29, 10), edge);
        // The outer corner is filled by the miter join.
        assert_pixel_near(surface.pixel(31, 8), edge);
        assert_eq!(surface.pixel(20, 20), [0, 0, 0, 255]);
    }

    #[test]
    fn test_zero_width_stroke_is_skipped() {
        let mut surface = RasterSurface::new(20, 20, [0.0, 0.0, 0.0]);
        square(&mut surface, 2.0, 12.0);
        surface.stroke([1.0, 1.0, 1.0, 1.0], 0.0);
        assert!(surface.pixels().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn test_non_finite_path_is_ignored() {
        let mut surface = RasterSurface::new(10, 10, [0.0, 0.0, 0.0]);
        surface.begin_path();
        surface.move_to(Point::new(f64::NAN, 1.0));
        surface.line_to(Point::new(5.0, 5.0));
        surface.line_to(Point::new(1.0, 8.0));
        surface.fill([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(surface.pixel(3, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_to_image_is_straight_alpha() {
        let surface = RasterSurface::new(3, 2, [0.0, 0.5, 1.0]);
        let image = surface.to_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, surface.pixel(2, 1));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut surface = RasterSurface::new(4, 4, [0.0, 0.0, 0.0]);
        surface.resize(8, 6);
        assert_eq!((surface.width(), surface.height()), (8, 6));
        surface.resize(0, 0);
        surface.fill_rect(0.0, 0.0, 10.0, 10.0, [1.0, 1.0, 1.0, 1.0]);
        assert!(surface.pixels().is_empty());
        assert_eq!(surface.pixel(0, 0), [0, 0, 0, 0]);
    }
}
