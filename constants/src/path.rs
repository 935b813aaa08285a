/// Deck manifest loaded at startup, relative to the asset root
pub const RELATIVE_DECK_PATH: &str = "decks/demo.json";

/// Directory holding quilt atlas images, relative to the asset root
pub const QUILT_TEXTURE_DIR: &str = "quilts";
