/// Default quilt grid dimensions when neither the deck manifest nor the
/// texture filename specifies them (standard portrait quilt packing)
pub const DEFAULT_QUILT_COLUMNS: u32 = 8;
pub const DEFAULT_QUILT_ROWS: u32 = 12;

/// Default total horizontal viewing cone in degrees
pub const DEFAULT_VIEWING_CONE_DEGREES: f32 = 58.0;

/// Exponent of the edge fade curve: near 0 through most of the cone,
/// rising sharply close to the boundary
pub const EDGE_FADE_EXPONENT: f32 = 5.0;

/// Maximum darkening applied at the cone boundary. 0.5 keeps the edge
/// views half-visible instead of fading fully to black.
pub const EDGE_FADE_LIMIT: f32 = 0.5;

/// Projected direction vectors shorter than this are treated as degenerate
/// (camera directly above/below the card)
pub const HORIZONTAL_EPSILON: f32 = 1e-4;
