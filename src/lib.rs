//! Hexfractal Core
//!
//! Animated, parametric generative hexagon patterns.
//!
//! # Features
//!
//! - Ten pattern algorithms (fractal, spiral, concentric, orbital, pendulum, aurora, comet, prism, bloom, ripple)
//! - Ordered pattern-type registry with per-type default parameters
//! - Frame renderer with trailing fade over any `DrawingSurface`
//! - tiny-skia raster surface with PNG export via `image`
//! - Parameter controller with bounded, stepped randomisation
//! - Python bindings via PyO3 (when `python` feature is enabled)

pub mod app;
pub mod color;
pub mod config;
pub mod control;
pub mod patterns;
pub mod render;
pub mod schedule;

// Re-export commonly used types
pub use app::{App, EventKind, InputEvent};
pub use color::{parse_hex_color, Hsla};
pub use config::{AppConfig, ConfigError};
pub use control::{ControlError, Controller, DisplayEcho, RenderState, TypeSelector};
pub use patterns::{
    generate, Algorithm, DrawCommand, LineCommand, ParamBounds, ParamBoundsTable, ParamField,
    PatternBuffer, PatternDescriptor, PatternInput, PatternLimits, PatternParams, PatternRegistry,
    Point, Primitive,
};
pub use render::{
    DrawingSurface, ExportError, FrameRenderer, FrameStats, RasterSurface, RecordingSurface,
    RenderSettings, Viewport,
};
pub use schedule::{Clock, FixedRateScheduler, FrameScheduler, ManualClock, SystemClock};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
#[allow(deprecated)] // allow_threads is deprecated in PyO3 0.27 but still functional
mod python_bindings {
    use crate::config::AppConfig;
    use crate::patterns::PatternRegistry;
    use crate::render::RasterSurface;
    use crate::schedule::{FixedRateScheduler, ManualClock};
    use crate::App;
    use pyo3::exceptions::PyRuntimeError;
    use pyo3::prelude::*;

    /// List all pattern types as (key, label, description).
    #[pyfunction]
    fn list_patterns() -> Vec<(String, String, String)> {
        PatternRegistry::builtin()
            .iter()
            .map(|d| (d.key.clone(), d.label.clone(), d.description.clone()))
            .collect()
    }

    /// Render `frames` frames of a pattern and save the last one as PNG.
    #[pyfunction]
    #[pyo3(signature = (output_path, pattern="classic", width=960, height=640, frames=60, fps=60.0, seed=None))]
    fn render_png(
        py: Python<'_>,
        output_path: &str,
        pattern: &str,
        width: u32,
        height: u32,
        frames: u64,
        fps: f64,
        seed: Option<u64>,
    ) -> PyResult<()> {
        let config = AppConfig {
            initial_pattern: pattern.to_string(),
            width: width as f64,
            height: height as f64,
            seed,
            ..Default::default()
        };
        let background = config
            .background_rgb()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        let mut app = App::with_clock(config, ManualClock::new(0.0))
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;

        let output = output_path.to_string();
        py.allow_threads(move || {
            let mut surface = RasterSurface::new(width, height, background);
            let mut scheduler = FixedRateScheduler::new(0.0, fps, frames);
            app.run(&mut surface, &mut scheduler);
            surface.save_png(&output)
        })
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Hexfractal Python module
    #[pymodule]
    pub fn hexfractal(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__version__", env!("CARGO_PKG_VERSION"))?;
        m.add_function(wrap_pyfunction!(list_patterns, m)?)?;
        m.add_function(wrap_pyfunction!(render_png, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python_bindings::*;
