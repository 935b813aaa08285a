use bevy::prelude::*;
use std::fmt;

use crate::engine::quilt::layout::{QuiltLayout, QuiltLayoutError};

/// Everything needed to spawn one card, resolved from the deck manifest
/// with defaults filled in. Immutable after resolution.
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub name: String,
    /// Quilt image path relative to the asset root.
    pub texture_path: String,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub position: Vec3,
    pub yaw: f32,
    pub layout: QuiltLayout,
}

/// Rejected card configuration. A bad card is skipped with an error log;
/// it never reaches spawning.
#[derive(Debug, Clone, PartialEq)]
pub enum CardConfigError {
    InvalidDimensions { width: f32, height: f32 },
    OversizedCornerRadius { radius: f32, limit: f32 },
    NegativeBorderWidth(f32),
    Quilt(QuiltLayoutError),
}

impl fmt::Display for CardConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "card dimensions must be positive, got {width}x{height}")
            }
            Self::OversizedCornerRadius { radius, limit } => {
                write!(f, "corner radius {radius} exceeds half the short side ({limit})")
            }
            Self::NegativeBorderWidth(width) => {
                write!(f, "border width must not be negative, got {width}")
            }
            Self::Quilt(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CardConfigError {}

impl From<QuiltLayoutError> for CardConfigError {
    fn from(err: QuiltLayoutError) -> Self {
        Self::Quilt(err)
    }
}

impl CardConfig {
    /// Reject geometry the rounded-rect builder cannot represent.
    pub fn validate(&self) -> Result<(), CardConfigError> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(CardConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let limit = self.width.min(self.height) * 0.5;
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 || self.corner_radius > limit {
            return Err(CardConfigError::OversizedCornerRadius {
                radius: self.corner_radius,
                limit,
            });
        }

        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(CardConfigError::NegativeBorderWidth(self.border_width));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::card::{DEFAULT_BORDER_COLOR, DEFAULT_CARD};

    fn base_config() -> CardConfig {
        CardConfig {
            name: "test".into(),
            texture_path: "quilts/test_qs8x12a0.75.png".into(),
            width: DEFAULT_CARD.width,
            height: DEFAULT_CARD.height,
            corner_radius: DEFAULT_CARD.corner_radius,
            border_width: DEFAULT_CARD.border_width,
            border_color: DEFAULT_BORDER_COLOR,
            position: Vec3::ZERO,
            yaw: 0.0,
            layout: QuiltLayout::new(8, 12, 58.0).unwrap(),
        }
    }

    #[test]
    fn default_card_is_valid() {
        assert_eq!(base_config().validate(), Ok(()));
    }

    #[test]
    fn rejects_nonpositive_dimensions() {
        let mut config = base_config();
        config.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(CardConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_radius_larger_than_half_the_short_side() {
        let mut config = base_config();
        config.corner_radius = 0.11;
        assert!(matches!(
            config.validate(),
            Err(CardConfigError::OversizedCornerRadius { .. })
        ));
    }

    #[test]
    fn rejects_negative_border() {
        let mut config = base_config();
        config.border_width = -0.01;
        assert!(matches!(
            config.validate(),
            Err(CardConfigError::NegativeBorderWidth(_))
        ));
    }
}
