use bevy::prelude::*;

use crate::engine::card::spawn::{CardRestPose, QuiltCard};

/// Request to put every card back in its rest arrangement. Written by the
/// `R` shortcut or the `reset_layout` RPC method.
#[derive(Event)]
pub struct ResetLayoutEvent;

pub fn handle_reset_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<ResetLayoutEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        events.write(ResetLayoutEvent);
    }
}

pub fn apply_reset_layout(
    mut events: EventReader<ResetLayoutEvent>,
    mut cards: Query<(&mut Transform, &CardRestPose), With<QuiltCard>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    for (mut transform, rest) in &mut cards {
        transform.translation = rest.position;
        transform.rotation = Quat::from_rotation_y(rest.yaw);
    }
}
