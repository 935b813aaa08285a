/// Room backdrop: a bare void is disorienting once the camera starts
/// moving, so the cards sit inside a wireframe box with a translucent
/// floor.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::render_settings::{
    FLOOR_OPACITY, FLOOR_SIZE, ROOM_LINE_COLOR, ROOM_SIZE, ROOM_SUBDIVISIONS,
};

#[derive(Component)]
pub struct RoomEnvironment;

pub fn spawn_environment(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let line_material = materials.add(StandardMaterial {
        base_color: ROOM_LINE_COLOR,
        unlit: true,
        ..default()
    });

    // Room sits on the floor plane: its lower face at y = 0. Hidden in the
    // flat preview by default; G toggles it.
    commands.spawn((
        Mesh3d(meshes.add(create_box_line_mesh(ROOM_SIZE, ROOM_SUBDIVISIONS))),
        MeshMaterial3d(line_material),
        Transform::from_xyz(0.0, ROOM_SIZE * 0.5, 0.0),
        Visibility::Hidden,
        RoomEnvironment,
    ));

    let floor_material = materials.add(StandardMaterial {
        base_color: ROOM_LINE_COLOR.with_alpha(FLOOR_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(floor_material),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        Visibility::Hidden,
        RoomEnvironment,
    ));
}

/// Show or hide the room with G.
pub fn toggle_environment(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Visibility, With<RoomEnvironment>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyG) {
        return;
    }
    for mut visibility in &mut query {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
    }
}

pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

/// Line-list mesh of a cube with every face subdivided into a grid of
/// lines. Vertices come in pairs; the index buffer is sequential.
fn create_box_line_mesh(size: f32, segments: u32) -> Mesh {
    let half = size * 0.5;
    let step = size / segments as f32;

    let mut vertices: Vec<[f32; 3]> = Vec::new();

    // For each axis, grid lines on the two faces perpendicular to it. A
    // face gets lines in both tangent directions; shared edges repeat,
    // which is harmless for a line list.
    for axis in 0..3 {
        let (u_axis, v_axis) = ((axis + 1) % 3, (axis + 2) % 3);
        for side in [-half, half] {
            for i in 0..=segments {
                let offset = -half + i as f32 * step;

                let mut start = [0.0f32; 3];
                let mut end = [0.0f32; 3];
                start[axis] = side;
                end[axis] = side;

                // Line running along v at fixed u
                start[u_axis] = offset;
                end[u_axis] = offset;
                start[v_axis] = -half;
                end[v_axis] = half;
                vertices.push(start);
                vertices.push(end);

                // Line running along u at fixed v
                start[u_axis] = -half;
                end[u_axis] = half;
                start[v_axis] = offset;
                end[v_axis] = offset;
                vertices.push(start);
                vertices.push(end);
            }
        }
    }

    let indices: Vec<u32> = (0..vertices.len() as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_line_mesh_stays_on_the_cube_surface() {
        let mesh = create_box_line_mesh(6.0, 10);
        let Some(bevy::render::mesh::VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("position attribute missing");
        };

        assert!(!positions.is_empty());
        assert_eq!(positions.len() % 2, 0, "line list needs vertex pairs");
        for p in positions {
            let on_surface = p.iter().any(|c| (c.abs() - 3.0).abs() < 1e-6);
            assert!(on_surface, "vertex {p:?} floats inside the box");
            assert!(p.iter().all(|c| c.abs() <= 3.0 + 1e-6));
        }
    }
}
