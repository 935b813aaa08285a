use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{GRAB_EMISSIVE, GRAB_ROTATE_SPEED, HOVER_EMISSIVE};

use super::ray::ray_hits_card;
use crate::engine::camera::orbit_camera::PointerCapture;
use crate::engine::card::spawn::{CardBorderMaterial, CardExtent, QuiltCard};

#[derive(Resource, Default)]
pub struct GrabState {
    /// Card under the cursor and its ray distance, refreshed every frame
    /// while nothing is grabbed.
    pub hovered: Option<(Entity, f32)>,
    pub grabbed: Option<Entity>,
    pub grab_distance: f32,
}

/// Tint the border of the card under the cursor. Skipped while a grab is
/// in progress; the grab system owns the highlight then.
pub fn hover_highlight_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    q_cards: Query<(Entity, &GlobalTransform, &CardExtent, &CardBorderMaterial), With<QuiltCard>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut state: ResMut<GrabState>,
) {
    if state.grabbed.is_some() {
        return;
    }

    state.hovered = cursor_ray(&windows, &cameras).and_then(|(origin, dir)| {
        let mut best: Option<(Entity, f32)> = None;
        for (entity, global, extent, _) in &q_cards {
            if let Some(t) = ray_hits_card(origin, dir, global, extent) {
                if best.is_none() || t < best.unwrap().1 {
                    best = Some((entity, t));
                }
            }
        }
        best
    });

    let hovered_entity = state.hovered.map(|(entity, _)| entity);
    for (entity, _, _, border) in &q_cards {
        let emissive = if Some(entity) == hovered_entity {
            HOVER_EMISSIVE
        } else {
            LinearRgba::BLACK
        };
        if let Some(material) = materials.get_mut(&border.0) {
            material.emissive = emissive;
        }
    }
}

/// Press-and-hold grab: the card follows the cursor ray at its grab
/// distance and yaws with the scroll wheel. The orbit camera's pointer is
/// released for the duration.
pub fn grab_card_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut q_cards: Query<(&mut Transform, &CardBorderMaterial), With<QuiltCard>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut state: ResMut<GrabState>,
    mut capture: ResMut<PointerCapture>,
) {
    // Start a grab on the hovered card
    if buttons.just_pressed(MouseButton::Left) && state.grabbed.is_none() {
        if let Some((entity, t)) = state.hovered.take() {
            state.grabbed = Some(entity);
            state.grab_distance = t;
            capture.lock_orbit = true;
            capture.lock_zoom = true;
        }
    }

    // Release restores the hover highlight next frame
    if buttons.just_released(MouseButton::Left) && state.grabbed.is_some() {
        state.grabbed = None;
        capture.lock_orbit = false;
        capture.lock_zoom = false;
    }

    let Some(grabbed) = state.grabbed else {
        return;
    };
    let Ok((mut transform, border)) = q_cards.get_mut(grabbed) else {
        state.grabbed = None;
        capture.lock_orbit = false;
        capture.lock_zoom = false;
        return;
    };

    if let Some(material) = materials.get_mut(&border.0) {
        material.emissive = GRAB_EMISSIVE;
    }

    // Follow the cursor ray at the original grab distance
    if let Some((origin, dir)) = cursor_ray(&windows, &cameras) {
        transform.translation = origin + dir * state.grab_distance;
    }

    // Scroll yaws the grabbed card; the camera dolly is locked out
    let mut delta = 0.0f32;
    for ev in wheel.read() {
        delta += ev.y;
    }
    if delta.abs() >= f32::EPSILON {
        transform.rotate_y(delta * GRAB_ROTATE_SPEED);
    }
}

fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
) -> Option<(Vec3, Vec3)> {
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let (cam_xf, camera) = cameras.single().ok()?;
    let ray = camera.viewport_to_world(cam_xf, cursor_pos).ok()?;
    Some((ray.origin, ray.direction.as_vec3()))
}
