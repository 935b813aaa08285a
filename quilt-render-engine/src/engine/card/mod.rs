//! Quilt cards: the shader material, the rounded-rectangle face geometry,
//! per-card configuration, and spawning.

/// Quilt card shader material with per-frame viewing parameters.
pub mod material;

/// Rounded-rectangle mesh construction and containment tests.
pub mod geometry;

/// Validated per-card configuration resolved from the deck manifest.
pub mod config;

/// Card entity spawning: face, border, markers.
pub mod spawn;
