use bevy::prelude::*;
use constants::quilt::HORIZONTAL_EPSILON;

/// Signed horizontal angle between the direction from a card to the camera
/// and the card's facing normal (+Z in card-local space), both projected
/// onto the XZ plane. Quilts only carry horizontal parallax, so the
/// vertical component is discarded before measuring.
///
/// Returns a value in `(-PI, PI]`: 0 when the camera is directly in front
/// of the card face, `PI` when directly behind (the sign at the exact-behind
/// boundary is `+PI`; the cross product is zero there so the negate branch
/// never fires). Negative when the camera is on the card's local +X side.
///
/// Returns `None` in the degenerate case where either projected direction
/// collapses (camera directly above/below the card, or the card facing
/// straight up/down); callers keep the previous frame's angle.
pub fn compute_relative_angle(
    camera_position: Vec3,
    card_position: Vec3,
    card_rotation: Quat,
) -> Option<f32> {
    let to_camera = project_horizontal(camera_position - card_position)?;
    let forward = project_horizontal(card_rotation * Vec3::Z)?;

    let dot = to_camera.dot(forward).clamp(-1.0, 1.0);
    let mut angle = dot.acos();

    // The cross product's vertical component tells left from right of the
    // card's forward axis.
    if to_camera.cross(forward).y < 0.0 {
        angle = -angle;
    }

    Some(angle)
}

/// Drop the vertical component and re-normalise.
fn project_horizontal(v: Vec3) -> Option<Vec3> {
    let horizontal = Vec3::new(v.x, 0.0, v.z);
    if horizontal.length_squared() < HORIZONTAL_EPSILON * HORIZONTAL_EPSILON {
        return None;
    }
    Some(horizontal.normalize())
}
