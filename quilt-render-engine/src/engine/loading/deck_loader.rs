use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use constants::card::{DEFAULT_BORDER_COLOR, DEFAULT_CARD};
use constants::path::RELATIVE_DECK_PATH;
use constants::quilt::{DEFAULT_QUILT_COLUMNS, DEFAULT_QUILT_ROWS, DEFAULT_VIEWING_CONE_DEGREES};

use crate::engine::assets::card_assets::{CardAssets, PendingCard};
use crate::engine::card::config::{CardConfig, CardConfigError};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::quilt::layout::{QuiltLayout, parse_quilt_stem};

/// Explicit quilt grid dimensions in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuiltDims {
    pub columns: u32,
    pub rows: u32,
}

/// One card entry in the deck manifest. Everything but the texture is
/// optional; omitted fields fall back to the `qs{c}x{r}a{a}` filename
/// convention and then to the defaults in the `constants` crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    pub texture_file: String,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub corner_radius: Option<f32>,
    #[serde(default)]
    pub border_width: Option<f32>,
    #[serde(default)]
    pub border_color: Option<[f32; 3]>,
    #[serde(default)]
    pub quilt: Option<QuiltDims>,
    #[serde(default)]
    pub viewing_cone_degrees: Option<f32>,
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    #[serde(default)]
    pub yaw_degrees: Option<f32>,
}

/// Deck manifest as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct CardDeck {
    pub cards: Vec<CardDefinition>,
}

impl CardDefinition {
    /// Fill in defaults and validate, producing a spawnable config.
    /// Grid dimensions come from, in order: the manifest entry, the
    /// texture filename convention, the crate defaults.
    pub fn resolve(&self) -> Result<CardConfig, CardConfigError> {
        let stem = Path::new(&self.texture_file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(parse_quilt_stem);

        let (columns, rows) = match (&self.quilt, stem) {
            (Some(dims), _) => (dims.columns, dims.rows),
            (None, Some(stem)) => (stem.columns, stem.rows),
            (None, None) => (DEFAULT_QUILT_COLUMNS, DEFAULT_QUILT_ROWS),
        };
        let cone = self
            .viewing_cone_degrees
            .unwrap_or(DEFAULT_VIEWING_CONE_DEGREES);
        let layout = QuiltLayout::new(columns, rows, cone)?;

        let config = CardConfig {
            name: self.name.clone(),
            texture_path: self.texture_file.clone(),
            width: self.width.unwrap_or(DEFAULT_CARD.width),
            height: self.height.unwrap_or(DEFAULT_CARD.height),
            corner_radius: self.corner_radius.unwrap_or(DEFAULT_CARD.corner_radius),
            border_width: self.border_width.unwrap_or(DEFAULT_CARD.border_width),
            border_color: self
                .border_color
                .map(|[r, g, b]| Color::srgb(r, g, b))
                .unwrap_or(DEFAULT_BORDER_COLOR),
            position: self.position.map(Vec3::from).unwrap_or(Vec3::ZERO),
            yaw: self.yaw_degrees.unwrap_or(0.0).to_radians(),
            layout,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Resource, Default)]
pub struct DeckLoader {
    handle: Option<Handle<CardDeck>>,
}

/// Kick off the deck manifest load at startup.
pub fn start_loading(mut deck_loader: ResMut<DeckLoader>, asset_server: Res<AssetServer>) {
    deck_loader.handle = Some(asset_server.load(RELATIVE_DECK_PATH));
}

/// Resolve the deck once the manifest asset is in and start loading every
/// card's quilt texture. Cards with rejected configuration are skipped
/// with an error log; they never panic the loop.
pub fn load_deck_system(
    mut loading_progress: ResMut<LoadingProgress>,
    deck_loader: Res<DeckLoader>,
    mut assets: ResMut<CardAssets>,
    asset_server: Res<AssetServer>,
    decks: Res<Assets<CardDeck>>,
) {
    if loading_progress.deck_loaded {
        return;
    }

    let Some(deck) = deck_loader.handle.as_ref().and_then(|handle| decks.get(handle)) else {
        return;
    };

    for definition in &deck.cards {
        match definition.resolve() {
            Ok(config) => {
                let texture = asset_server.load(&config.texture_path);
                assets.pending.push(PendingCard { config, texture });
            }
            Err(err) => {
                error!("skipping card '{}': {}", definition.name, err);
            }
        }
    }

    info!("✓ Deck loaded: {} cards", assets.pending.len());
    loading_progress.deck_loaded = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_definition() -> CardDefinition {
        CardDefinition {
            name: "tree".into(),
            texture_file: "quilts/christmas_tree_2023_qs8x12a0.75.jpg".into(),
            width: None,
            height: None,
            corner_radius: None,
            border_width: None,
            border_color: None,
            quilt: None,
            viewing_cone_degrees: None,
            position: None,
            yaw_degrees: None,
        }
    }

    #[test]
    fn resolves_grid_from_the_filename_convention() {
        let config = minimal_definition().resolve().unwrap();
        assert_eq!(config.layout.columns(), 8);
        assert_eq!(config.layout.rows(), 12);
        assert_eq!(config.layout.viewing_cone_degrees(), DEFAULT_VIEWING_CONE_DEGREES);
        assert_eq!(config.width, DEFAULT_CARD.width);
    }

    #[test]
    fn explicit_dimensions_win_over_the_filename() {
        let mut definition = minimal_definition();
        definition.quilt = Some(QuiltDims {
            columns: 6,
            rows: 9,
        });
        definition.viewing_cone_degrees = Some(40.0);
        let config = definition.resolve().unwrap();
        assert_eq!(config.layout.columns(), 6);
        assert_eq!(config.layout.rows(), 9);
        assert_eq!(config.layout.viewing_cone_degrees(), 40.0);
    }

    #[test]
    fn falls_back_to_defaults_without_a_quilt_stem() {
        let mut definition = minimal_definition();
        definition.texture_file = "quilts/mystery.png".into();
        let config = definition.resolve().unwrap();
        assert_eq!(config.layout.columns(), DEFAULT_QUILT_COLUMNS);
        assert_eq!(config.layout.rows(), DEFAULT_QUILT_ROWS);
    }

    #[test]
    fn rejects_invalid_card_geometry() {
        let mut definition = minimal_definition();
        definition.width = Some(-1.0);
        assert!(definition.resolve().is_err());
    }

    #[test]
    fn rejects_invalid_manifest_cone() {
        let mut definition = minimal_definition();
        definition.viewing_cone_degrees = Some(0.0);
        assert!(definition.resolve().is_err());
    }

    #[test]
    fn deck_manifest_round_trips_through_json() {
        let json = r#"{
            "cards": [
                { "name": "tree", "texture_file": "quilts/tree_qs8x12a0.75.jpg", "position": [-0.2, 1.0, 0.0] }
            ]
        }"#;
        let deck: CardDeck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.cards.len(), 1);
        let config = deck.cards[0].resolve().unwrap();
        assert_eq!(config.position, Vec3::new(-0.2, 1.0, 0.0));
    }
}
