use bevy::prelude::*;

use crate::engine::assets::card_assets::CardAssets;
use crate::engine::card::material::QuiltMaterial;
use crate::engine::card::spawn::spawn_card;
use crate::engine::loading::progress::LoadingProgress;

/// Spawn every resolved card once its quilt texture is configured.
pub fn create_cards_when_ready(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut quilt_materials: ResMut<Assets<QuiltMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut assets: ResMut<CardAssets>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if loading_progress.cards_created || !loading_progress.textures_configured {
        return;
    }

    let mut spawned = 0;
    for pending in &assets.pending {
        spawn_card(
            &mut commands,
            &mut meshes,
            &mut quilt_materials,
            &mut standard_materials,
            &pending.config,
            pending.texture.clone(),
        );
        spawned += 1;
    }

    info!("✓ Spawned {spawned} quilt cards");
    assets.is_loaded = true;
    loading_progress.cards_created = true;
}
