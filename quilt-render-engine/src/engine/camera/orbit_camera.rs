use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::render_settings::PREVIEW_CAMERA_DISTANCE;

/// Orbit camera state: the camera circles `focus_point` at `distance`,
/// which is exactly the motion that sweeps the viewing angle through a
/// card's cone.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::new(0.0, 1.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            distance: PREVIEW_CAMERA_DISTANCE,
        }
    }
}

/// Set by the grab tool when the pointer is busy manipulating a card, so
/// the camera does not orbit or dolly underneath it.
#[derive(Resource, Default)]
pub struct PointerCapture {
    pub lock_orbit: bool,
    pub lock_zoom: bool,
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    capture: Res<PointerCapture>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left drag orbits unless the grab tool owns the pointer
    if mouse_button.pressed(MouseButton::Left) && !capture.lock_orbit && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.005;
        let pitch_sens = 0.004;
        orbit.yaw -= mouse_delta.x * yaw_sens;
        orbit.pitch -= mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.45, 1.45);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if scroll_accum.abs() > f32::EPSILON && !capture.lock_zoom {
        let dolly_speed = (orbit.distance * 0.1).clamp(0.02, 1.0);
        orbit.distance = (orbit.distance - scroll_accum * dolly_speed).clamp(0.3, 12.0);
    }

    // Smoothed repositioning toward the orbit target
    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.focus_point + target_rot * (Vec3::Z * orbit.distance);

    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}
