use bevy::prelude::*;

use crate::engine::card::material::QuiltMaterial;
use crate::engine::card::spawn::{CardQuilt, QuiltCard};
use crate::engine::quilt::sampler::{edge_fade, select_views};

/// Native overlay line per card: which quilt cells the current viewing
/// angle resolves to, and the edge fade. Runs the same arithmetic as the
/// fragment shader via the CPU sampler mirror.
#[derive(Component)]
pub struct ViewDebugText;

pub fn view_debug_update_system(
    cards: Query<(&Name, &CardQuilt, &MeshMaterial3d<QuiltMaterial>), With<QuiltCard>>,
    materials: Res<Assets<QuiltMaterial>>,
    mut query: Query<&mut Text, With<ViewDebugText>>,
) {
    for mut text in &mut query {
        let mut readout = String::new();
        for (name, quilt, material_handle) in &cards {
            let Some(material) = materials.get(&material_handle.0) else {
                continue;
            };
            let angle = material.params.relative_angle;
            let blend = select_views(angle, &quilt.0);
            let fade = edge_fade(angle, &quilt.0);
            readout.push_str(&format!(
                "{}: {:+.2} rad  view {} > {} ({:.2})  fade {:.2}\n",
                name.as_str(),
                angle,
                blend.current,
                blend.next,
                blend.fraction,
                fade
            ));
        }
        text.0 = readout;
    }
}
