//! Drawing surface abstraction.

use crate::patterns::Point;

/// Affine transform applied to every drawing call.
pub use tiny_skia::Transform;

/// Primitive 2D drawing operations a host surface must provide.
///
/// Coordinates are in CSS pixels; colors are straight RGBA in 0..1.
pub trait DrawingSurface {
    /// Resize the backing store in device pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Transform);

    /// Post-multiply a scale onto the current transform.
    fn scale(&mut self, sx: f64, sy: f64);

    fn save(&mut self);

    fn restore(&mut self);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    fn close_path(&mut self);

    fn fill(&mut self, color: [f32; 4]);

    fn stroke(&mut self, color: [f32; 4], width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [f32; 4]);
}
