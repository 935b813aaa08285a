use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    AssetsLoaded,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Transition to AssetsLoaded once the loading chain has spawned the cards
pub fn transition_to_assets_loaded(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.cards_created {
        info!("→ Transitioning to AssetsLoaded state");
        next_state.set(AppState::AssetsLoaded);
    }
}

// Final transition to running state
pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    info!("→ All systems ready, transitioning to Running state");
    next_state.set(AppState::Running);
}

/// Push per-texture loading states to the embedding frontend whenever they
/// change.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_sent: Local<Vec<(String, i32)>>,
) {
    if loading_progress.texture_loading_states == *last_sent {
        return;
    }
    *last_sent = loading_progress.texture_loading_states.clone();

    let textures: Vec<serde_json::Value> = last_sent
        .iter()
        .map(|(name, loaded)| {
            serde_json::json!({
                "name": name,
                "loaded": *loaded == 1,
            })
        })
        .collect();

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({ "textures": textures }),
    );
}
