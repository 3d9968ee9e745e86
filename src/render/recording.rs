//! Surface that records every call, for tests and headless inspection.

use super::surface::{DrawingSurface, Transform};
use crate::patterns::Point;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize { width: u32, height: u32 },
    SetTransform(Transform),
    Scale { sx: f64, sy: f64 },
    Save,
    Restore,
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Fill([f32; 4]),
    Stroke { color: [f32; 4], width: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: [f32; 4] },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    width: u32,
    height: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Backing size in device pixels after the last resize.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of recorded `fill` calls.
    pub fn fill_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, SurfaceOp::Fill(_))).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::Resize { width, height });
    }

    fn set_transform(&mut self, transform: Transform) {
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn fill(&mut self, color: [f32; 4]) {
        self.ops.push(SurfaceOp::Fill(color));
    }

    fn stroke(&mut self, color: [f32; 4], width: f64) {
        self.ops.push(SurfaceOp::Stroke { color, width });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [f32; 4]) {
        self.ops.push(SurfaceOp::FillRect { x, y, width, height, color });
    }
}
