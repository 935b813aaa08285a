use bevy::prelude::*;

/// Horizontal spacing between cards in the default row arrangement
pub const CARD_SPACING: f32 = 0.2;

/// Distance from the preview camera to the card group
pub const PREVIEW_CAMERA_DISTANCE: f32 = 7.5;

/// Narrow preview FOV in degrees; keeps the flat preview near-orthographic
/// so the parallax effect reads as the quilt changing, not perspective
pub const PREVIEW_FOV_DEGREES: f32 = 5.0;

/// Wireframe room surrounding the cards
pub const ROOM_SIZE: f32 = 6.0;
pub const ROOM_SUBDIVISIONS: u32 = 10;
pub const ROOM_LINE_COLOR: Color = Color::srgb(0.737, 0.737, 0.737);

/// Translucent floor inside the room
pub const FLOOR_SIZE: f32 = 4.8;
pub const FLOOR_OPACITY: f32 = 0.25;

/// Border emissive tints for pointer feedback
pub const HOVER_EMISSIVE: LinearRgba = LinearRgba::new(0.4, 0.0, 0.0, 1.0);
pub const GRAB_EMISSIVE: LinearRgba = LinearRgba::new(0.0, 0.0, 0.8, 1.0);

/// Radians per scroll line when rotating a grabbed card
pub const GRAB_ROTATE_SPEED: f32 = 0.15;
