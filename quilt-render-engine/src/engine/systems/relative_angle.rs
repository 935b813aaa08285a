use bevy::prelude::*;

use crate::engine::card::material::QuiltMaterial;
use crate::engine::card::spawn::QuiltCard;
use crate::engine::quilt::angle::compute_relative_angle;

/// Recompute every card's relative viewing angle from the current camera
/// and card transforms and write it into the card's material uniform. Runs
/// every frame; the angle is never cached across frames, so each frame is
/// self-correcting. Nothing else may write `relative_angle`.
pub fn update_relative_angles(
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    cards: Query<(&GlobalTransform, &MeshMaterial3d<QuiltMaterial>), With<QuiltCard>>,
    mut materials: ResMut<Assets<QuiltMaterial>>,
) {
    let Ok(camera_transform) = cameras.single() else {
        return;
    };
    let camera_position = camera_transform.translation();

    for (card_transform, material_handle) in &cards {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };

        let (_, rotation, translation) = card_transform.to_scale_rotation_translation();
        match compute_relative_angle(camera_position, translation, rotation) {
            Some(angle) => material.params.relative_angle = angle,
            // Degenerate pose (camera straight overhead): keep the previous
            // frame's angle rather than snapping to the centre view.
            None => {}
        }
    }
}
