//! Example: Render a pattern to a sequence of PNG frames.
//!
//! Run with:
//!     cargo run --example render_frames -- [pattern] [frames] [output_dir] [config.json]
//!
//! Set `RUST_LOG=debug` to see parameter and frame logging.

use anyhow::Context;
use hexfractal::schedule::{FixedRateScheduler, FrameScheduler, ManualClock};
use hexfractal::{App, AppConfig, RasterSurface};
use std::path::PathBuf;

const FPS: f64 = 30.0;
const SAVE_EVERY: u64 = 10;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let pattern = args.next();
    let frames: u64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("Invalid frame count: {}", raw))?,
        None => 60,
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "frames".to_string()));
    let mut config = match args.next() {
        Some(path) => AppConfig::from_file(&path).with_context(|| format!("Failed to load {}", path))?,
        None => AppConfig::default(),
    };
    if let Some(pattern) = pattern {
        config.initial_pattern = pattern;
    }
    config.validate()?;

    println!("Hexfractal - Frame Export");
    println!("=========================\n");
    println!("  Pattern: {}", config.initial_pattern);
    println!("  Resolution: {}x{} @{}x", config.width, config.height, config.device_pixel_ratio);
    println!("  Frames: {} at {} fps", frames, FPS);
    println!("  Output: {}\n", output_dir.display());

    let (width, height) = config.viewport().backing_size();
    let background = config.background_rgb()?;
    let mut surface = RasterSurface::new(width, height, background);
    let mut scheduler = FixedRateScheduler::new(0.0, FPS, frames);
    let mut app = App::with_clock(config, ManualClock::new(0.0))?;

    app.initialize(&mut surface, &mut scheduler);

    let mut saved = 0;
    while let Some(time) = scheduler.next_frame() {
        app.clock().set(time);
        let stats = app.frame(time, &mut surface, &mut scheduler);
        let index = scheduler.frames_emitted();

        if index % SAVE_EVERY == 0 || index == frames {
            let path = output_dir.join(format!("frame_{:05}.png", index));
            surface
                .save_png(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            saved += 1;
            println!(
                "  frame {:>5}  {:>6} primitives{}  -> {}",
                index,
                stats.primitives,
                if stats.truncated { " (truncated)" } else { "" },
                path.display()
            );
        }
    }

    println!("\nDone! Saved {} frames to {}", saved, output_dir.display());
    Ok(())
}
