use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub deck_loaded: bool,
    pub textures_loaded: bool,
    pub texture_loading_states: Vec<(String, i32)>,
    pub textures_configured: bool,
    pub cards_created: bool,
}
