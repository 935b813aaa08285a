use bevy::prelude::*;
use constants::card::BORDER_Z_OFFSET;

use super::config::CardConfig;
use super::geometry::create_rounded_rect_mesh;
use super::material::{QuiltMaterial, QuiltParams};
use crate::engine::quilt::layout::QuiltLayout;

/// Marker for a card face entity (the quilt-textured mesh).
#[derive(Component)]
pub struct QuiltCard;

/// Marker for a card's border entity, a child of the face.
#[derive(Component)]
pub struct CardBorder;

/// The card's quilt layout, kept on the entity for the debug overlay and
/// the RPC view-state query. The material uniform carries the same values
/// as f32s for the shader.
#[derive(Component)]
pub struct CardQuilt(pub QuiltLayout);

/// Pose a card returns to when the layout is reset.
#[derive(Component, Clone, Copy)]
pub struct CardRestPose {
    pub position: Vec3,
    pub yaw: f32,
}

/// Physical extent of a card, used by ray picking.
#[derive(Component, Clone, Copy)]
pub struct CardExtent {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

/// Handle to the border's material, kept on the card face entity so the
/// grab tool can tint the border without walking the hierarchy.
#[derive(Component, Clone)]
pub struct CardBorderMaterial(pub Handle<StandardMaterial>);

/// Spawn one card: a quilt-material face with a slightly larger bordered
/// back plate as a child. The config must already be validated.
pub fn spawn_card(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    quilt_materials: &mut Assets<QuiltMaterial>,
    standard_materials: &mut Assets<StandardMaterial>,
    config: &CardConfig,
    quilt_texture: Handle<Image>,
) -> Entity {
    let face_mesh = create_rounded_rect_mesh(config.width, config.height, config.corner_radius);

    let material = QuiltMaterial {
        quilt_texture,
        params: QuiltParams::for_layout(&config.layout),
    };

    let border_mesh = create_rounded_rect_mesh(
        config.width + config.border_width,
        config.height + config.border_width,
        config.border_width,
    );
    let border_material = standard_materials.add(StandardMaterial {
        base_color: config.border_color,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(face_mesh)),
            MeshMaterial3d(quilt_materials.add(material)),
            Transform::from_translation(config.position)
                .with_rotation(Quat::from_rotation_y(config.yaw)),
            QuiltCard,
            CardQuilt(config.layout),
            CardRestPose {
                position: config.position,
                yaw: config.yaw,
            },
            CardExtent {
                width: config.width,
                height: config.height,
                corner_radius: config.corner_radius,
            },
            CardBorderMaterial(border_material.clone()),
            Name::new(config.name.clone()),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(border_mesh)),
                MeshMaterial3d(border_material),
                Transform::from_xyz(0.0, 0.0, BORDER_Z_OFFSET),
                CardBorder,
            ));
        })
        .id()
}
