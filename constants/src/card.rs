use bevy::prelude::*;

/// Physical dimensions of a card in metres.
#[derive(Debug, Clone, Copy)]
pub struct CardSettings {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub border_width: f32,
}

/// Portrait trading-card proportions used when the deck manifest omits
/// dimensions.
pub const DEFAULT_CARD: CardSettings = CardSettings {
    width: 0.2,
    height: 0.3,
    corner_radius: 0.02,
    border_width: 0.02,
};

/// Default border tint (pale violet)
pub const DEFAULT_BORDER_COLOR: Color = Color::srgb(0.667, 0.667, 1.0);

/// The border quad sits just behind the card face so it never z-fights
pub const BORDER_Z_OFFSET: f32 = -0.001;

/// Segments per rounded corner of the card outline
pub const CORNER_SEGMENTS: u32 = 8;
