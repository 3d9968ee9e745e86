//! Pattern type registry.
//!
//! Maps pattern-type keys to their display metadata, algorithm, and default
//! parameter bundle. Declaration order is display order.

use super::{Algorithm, PatternParams};
use serde::Serialize;

/// Key selected when nothing else is configured.
pub const DEFAULT_PATTERN_KEY: &str = "classic";

/// One selectable pattern type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternDescriptor {
    pub key: String,
    pub label: String,
    pub description: String,
    pub algorithm: Algorithm,
    pub defaults: PatternParams,
}

impl PatternDescriptor {
    fn builtin(
        key: &str,
        label: &str,
        description: &str,
        algorithm: Algorithm,
        defaults: PatternParams,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            algorithm,
            defaults,
        }
    }
}

/// Ordered, immutable set of pattern types with unique keys.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<PatternDescriptor>,
}

impl PatternRegistry {
    /// The ten built-in pattern types, one per algorithm.
    pub fn builtin() -> Self {
        let entries = vec![
            PatternDescriptor::builtin(
                "classic",
                "Classic",
                "The standard hexagon fractal; rotation and color gradients spread out gently.",
                Algorithm::Fractal,
                params(5, 12.0, 0.55, 1.12, 0.2, 80.0, 240.0),
            ),
            PatternDescriptor::builtin(
                "spiral",
                "Spiral Arm",
                "Hexagons swirl along a rotating arm that ripples like a ribbon over time.",
                Algorithm::Spiral,
                params(6, 18.0, 0.6, 1.0, 0.35, 120.0, 320.0),
            ),
            PatternDescriptor::builtin(
                "concentric",
                "Centroid Overlay",
                "Stacked hexagons rotate at slightly different speeds, creating interference patterns.",
                Algorithm::Concentric,
                params(8, 10.0, 0.86, 1.08, 0.15, 60.0, 200.0),
            ),
            PatternDescriptor::builtin(
                "lattice",
                "Orbital Mesh",
                "Concentric rings of hexagons tangle through speed differences into a mesh.",
                Algorithm::Orbital,
                params(4, 15.0, 0.5, 1.25, 0.25, 90.0, 280.0),
            ),
            PatternDescriptor::builtin(
                "pendulum",
                "Pendulum Layers",
                "Swinging arms build layers that sway with a gravity-like tempo.",
                Algorithm::Pendulum,
                params(5, 9.0, 0.68, 1.28, 0.45, 140.0, 260.0),
            ),
            PatternDescriptor::builtin(
                "aurora",
                "Aurora Shift",
                "Pale bands slowly overlap into a softly swaying curtain of light.",
                Algorithm::Aurora,
                params(7, 8.0, 0.62, 1.05, 0.18, 70.0, 340.0),
            ),
            PatternDescriptor::builtin(
                "comet",
                "Comet Trail",
                "A spiral with a trailing tail; sharp rotation traces a meteor shower.",
                Algorithm::Comet,
                params(6, 24.0, 0.52, 1.18, 0.28, 95.0, 360.0),
            ),
            PatternDescriptor::builtin(
                "prism",
                "Prism Grid",
                "Layers rotating at subtly different speeds scatter light across a lattice.",
                Algorithm::Prism,
                params(9, 9.0, 0.82, 1.02, 0.12, 55.0, 260.0),
            ),
            PatternDescriptor::builtin(
                "bloom",
                "Bloom Rings",
                "Petal-like rings swell gently into a soft halo.",
                Algorithm::Bloom,
                params(5, 14.0, 0.58, 1.34, 0.22, 130.0, 300.0),
            ),
            PatternDescriptor::builtin(
                "ripple",
                "Ripple Layers",
                "Layers drift and overlap like ripples spreading across water.",
                Algorithm::Ripple,
                params(7, 12.0, 0.74, 1.15, 0.32, 110.0, 220.0),
            ),
        ];

        Self { entries }
    }

    /// Look up a pattern type by key.
    pub fn lookup(&self, key: &str) -> Option<&PatternDescriptor> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Keys in declaration order.
    pub fn ordered_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.key.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn params(
    depth: u32,
    rotation_speed_deg: f64,
    shrink_factor: f64,
    spacing_factor: f64,
    wobble_strength: f64,
    delay_ms: f64,
    hue_range: f64,
) -> PatternParams {
    PatternParams {
        depth,
        rotation_speed_deg,
        shrink_factor,
        spacing_factor,
        wobble_strength,
        delay_ms,
        hue_range,
    }
}
