use bevy::prelude::*;

use crate::engine::assets::card_assets::CardAssets;
use crate::engine::loading::progress::LoadingProgress;

// Check if every card's quilt texture is loaded
pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<CardAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.textures_loaded || !loading_progress.deck_loaded {
        return;
    }

    let mut all_loaded = true;
    let mut progress = Vec::with_capacity(assets.pending.len());
    for pending in &assets.pending {
        let loaded = matches!(
            asset_server.get_load_state(&pending.texture),
            Some(bevy::asset::LoadState::Loaded)
        );
        all_loaded &= loaded;
        progress.push((pending.config.name.clone(), i32::from(loaded)));
    }

    // Keep per-texture states current so the frontend can show them.
    loading_progress.texture_loading_states = progress;

    if all_loaded {
        info!("✓ All quilt textures loaded");
        loading_progress.textures_loaded = true;
    }
}
