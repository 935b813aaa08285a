/// Orbit preview camera around the card group.
pub mod orbit_camera;
