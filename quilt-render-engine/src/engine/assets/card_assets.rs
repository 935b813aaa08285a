use bevy::prelude::*;

use crate::engine::card::config::CardConfig;

/// One card resolved from the deck manifest, waiting for its quilt texture.
#[derive(Debug, Clone)]
pub struct PendingCard {
    pub config: CardConfig,
    pub texture: Handle<Image>,
}

/// Cards resolved from the deck and their texture handles, filled during
/// the loading state and consumed when the cards are spawned.
#[derive(Resource, Default)]
pub struct CardAssets {
    pub pending: Vec<PendingCard>,
    pub is_loaded: bool,
}
