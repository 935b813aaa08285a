//! Mouse interaction tools for the cards.
//!
//! The desktop stand-in for the original controller interactions: hovering
//! a card tints its border, press-and-hold grabs it so it follows the
//! cursor ray, the scroll wheel yaws a grabbed card, and `R` (or the
//! `reset_layout` RPC method) returns every card to its rest pose. While a
//! card is grabbed the orbit camera releases the pointer via
//! [`PointerCapture`](crate::engine::camera::orbit_camera::PointerCapture).

/// Ray/card intersection in card-local space.
pub mod ray;

/// Hover highlight and press-and-hold grab with scroll rotation.
pub mod grab;

/// Rest-pose reset for the whole deck.
pub mod arrange;
