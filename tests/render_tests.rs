//! Integration tests for frame rendering and PNG export.

mod pattern_fixtures;

use hexfractal::control::RenderState;
use hexfractal::patterns::{PatternParams, PatternRegistry};
use hexfractal::render::{FrameRenderer, RasterSurface, RecordingSurface, SurfaceOp, Viewport};
use hexfractal::schedule::{FixedRateScheduler, FrameScheduler, ManualClock};
use hexfractal::{App, AppConfig};
use pattern_fixtures::EXPECTED_KEYS;
use tempfile::TempDir;

const BACKGROUND: [f32; 3] = [12.0 / 255.0, 15.0 / 255.0, 26.0 / 255.0];

#[test]
fn test_every_type_renders_on_recording_surface() {
    let registry = PatternRegistry::builtin();
    let mut renderer = FrameRenderer::default();
    let viewport = Viewport::new(960.0, 640.0, 1.0);

    for key in EXPECTED_KEYS {
        let defaults = registry.lookup(key).unwrap().defaults;
        let state = RenderState::new(defaults, key, 90.0, 0.0);
        let mut surface = RecordingSurface::new();
        let stats = renderer.render(&state, &registry, &viewport, 1_600.0, &mut surface);

        assert!(stats.primitives > 0, "{} drew nothing", key);
        assert!(!stats.truncated, "{} hit the budget", key);
        assert_eq!(surface.fill_count(), stats.hexagons, "{}", key);
        assert!(matches!(surface.ops()[0], SurfaceOp::FillRect { .. }));
    }
}

#[test]
fn test_draw_calls_are_balanced() {
    let registry = PatternRegistry::builtin();
    let mut renderer = FrameRenderer::default();
    let mut surface = RecordingSurface::new();
    let state = RenderState::new(PatternParams::default(), "pendulum", 0.0, 0.0);
    renderer.render(&state, &registry, &Viewport::new(500.0, 500.0, 1.0), 42.0, &mut surface);

    let saves = surface.ops().iter().filter(|op| **op == SurfaceOp::Save).count();
    let restores = surface.ops().iter().filter(|op| **op == SurfaceOp::Restore).count();
    assert_eq!(saves, restores);
    assert!(saves > 1);
}

#[test]
fn test_hue_drifts_with_elapsed_time() {
    let registry = PatternRegistry::builtin();
    let mut renderer = FrameRenderer::default();
    let mut surface = RecordingSurface::new();
    let state = RenderState::new(PatternParams::default(), "classic", 10.0, 2_000.0);
    let viewport = Viewport::new(300.0, 300.0, 1.0);

    let at_start = renderer.render(&state, &registry, &viewport, 2_000.0, &mut surface);
    let later = renderer.render(&state, &registry, &viewport, 7_000.0, &mut surface);
    assert!((at_start.hue_base - 10.0).abs() < 1e-9);
    assert!((later.hue_base - 110.0).abs() < 1e-9);
}

#[test]
fn test_raster_frame_exports_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("frame.png");

    let config = AppConfig {
        width: 320.0,
        height: 240.0,
        seed: Some(17),
        ..Default::default()
    };
    let mut app = App::with_clock(config, ManualClock::new(0.0)).unwrap();
    let mut surface = RasterSurface::new(1, 1, BACKGROUND);
    let mut scheduler = FixedRateScheduler::new(0.0, 30.0, 3);

    assert_eq!(app.run(&mut surface, &mut scheduler), 3);
    assert_eq!((surface.width(), surface.height()), (320, 240));

    let corner = surface.pixel(0, 0);
    let center = surface.pixel(160, 120);
    assert_eq!(corner[3], 255);
    assert_ne!(corner, center);

    surface.save_png(&path).unwrap();
    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (320, 240));
    assert_eq!(loaded.get_pixel(160, 120).0, center);
}

#[test]
fn test_high_dpi_backing_store() {
    let config = AppConfig {
        width: 200.0,
        height: 100.0,
        device_pixel_ratio: 2.0,
        seed: Some(1),
        ..Default::default()
    };
    let mut app = App::with_clock(config, ManualClock::new(0.0)).unwrap();
    let mut surface = RasterSurface::new(1, 1, BACKGROUND);
    let mut scheduler = FixedRateScheduler::new(0.0, 60.0, 1);

    app.run(&mut surface, &mut scheduler);
    assert_eq!((surface.width(), surface.height()), (400, 200));
    // The pattern center lands at the device-space center.
    assert_ne!(surface.pixel(200, 100), surface.pixel(0, 0));
}

#[test]
fn test_scheduler_stops_after_frame_budget() {
    let mut scheduler = FixedRateScheduler::new(100.0, 50.0, 2);
    assert_eq!(scheduler.next_frame(), None);
    scheduler.schedule_next();
    assert_eq!(scheduler.next_frame(), Some(100.0));
    scheduler.schedule_next();
    assert_eq!(scheduler.next_frame(), Some(120.0));
    scheduler.schedule_next();
    assert_eq!(scheduler.next_frame(), None);
}
