//! Integration tests for the pattern registry and type selection.

mod pattern_fixtures;

use hexfractal::control::{Controller, TypeSelector};
use hexfractal::patterns::{Algorithm, PatternRegistry};
use hexfractal::render::RecordingSurface;
use hexfractal::schedule::{FixedRateScheduler, ManualClock};
use hexfractal::{App, AppConfig};
use pattern_fixtures::EXPECTED_KEYS;

fn seeded_app() -> App<ManualClock> {
    let config = AppConfig {
        seed: Some(2024),
        ..Default::default()
    };
    App::with_clock(config, ManualClock::new(0.0)).unwrap()
}

#[test]
fn test_registry_order_matches_canonical_keys() {
    assert_eq!(PatternRegistry::builtin().ordered_keys(), EXPECTED_KEYS.to_vec());
}

#[test]
fn test_lattice_uses_orbital_algorithm() {
    let registry = PatternRegistry::builtin();
    assert_eq!(registry.lookup("lattice").map(|d| d.algorithm), Some(Algorithm::Orbital));
    assert_eq!(registry.lookup("classic").map(|d| d.algorithm), Some(Algorithm::Fractal));
}

#[test]
fn test_selector_stays_unique_after_injected_duplicate() {
    let mut app = seeded_app();
    let mut surface = RecordingSurface::new();
    let mut scheduler = FixedRateScheduler::new(0.0, 60.0, 1);

    app.initialize(&mut surface, &mut scheduler);
    assert_eq!(app.selector().keys(), EXPECTED_KEYS.to_vec());

    app.selector_mut().push_option("classic", "Duplicate");
    assert_eq!(app.selector().len(), EXPECTED_KEYS.len() + 1);

    app.populate_selector();
    assert_eq!(app.selector().keys(), EXPECTED_KEYS.to_vec());

    app.initialize(&mut surface, &mut scheduler);
    assert_eq!(app.selector().keys(), EXPECTED_KEYS.to_vec());
}

#[test]
fn test_repeated_population_is_stable() {
    let registry = PatternRegistry::builtin();
    let mut selector = TypeSelector::new();
    for _ in 0..5 {
        selector.populate(&registry, "comet");
    }
    assert_eq!(selector.keys(), EXPECTED_KEYS.to_vec());
    assert_eq!(selector.selected(), Some("comet"));
}

#[test]
fn test_select_type_round_trips_defaults() {
    let mut controller = Controller::seeded(5, 0.0);
    let registry = PatternRegistry::builtin();

    // Scramble first so every field actually has to change.
    controller.randomize(1.0);
    for descriptor in registry.iter() {
        assert!(controller.select_type(&descriptor.key, 10.0));
        assert_eq!(*controller.params(), descriptor.defaults, "{}", descriptor.key);
        assert_eq!(controller.state().active_type(), descriptor.key);
    }
}

#[test]
fn test_select_type_echoes_label_and_hint() {
    let mut controller = Controller::seeded(5, 0.0);
    let registry = PatternRegistry::builtin();
    for descriptor in registry.iter() {
        controller.select_type(&descriptor.key, 0.0);
        assert_eq!(controller.echo().type_label(), descriptor.label);
        assert_eq!(controller.echo().type_hint(), descriptor.description);
    }
}
