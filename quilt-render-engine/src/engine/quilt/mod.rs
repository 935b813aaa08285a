//! The light-field core: quilt atlas layout, the camera/card relative-angle
//! calculation, and a CPU mirror of the shader's cell-selection arithmetic.
//!
//! Everything in this module is pure — no ECS access, no GPU state — so the
//! angle and sampling behaviour is testable without a render loop.

/// Immutable quilt atlas description with construction-time validation.
pub mod layout;

/// Signed horizontal viewing angle between a camera and a card.
pub mod angle;

/// CPU mirror of the WGSL cell selection, blend, and edge fade.
pub mod sampler;
