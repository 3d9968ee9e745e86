//! Drawing onto 2D surfaces.
//!
//! This module provides:
//! - The `DrawingSurface` trait hosts implement (path, fill, stroke, rect, transform)
//! - Hexagon and polyline drawers
//! - A recording surface for tests and a software raster surface for PNG output
//! - The per-frame renderer with trailing fade

pub mod frame;
pub mod primitives;
pub mod raster;
pub mod recording;
pub mod surface;

pub use frame::{FrameRenderer, FrameStats, RenderSettings, Viewport};
pub use primitives::{draw_hexagon, draw_line, draw_primitive, hexagon_stroke_width, hexagon_vertices};
pub use raster::{ExportError, RasterSurface};
pub use recording::{RecordingSurface, SurfaceOp};
pub use surface::{DrawingSurface, Transform};
