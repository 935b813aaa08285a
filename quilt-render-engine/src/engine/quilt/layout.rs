use bevy::prelude::*;
use std::fmt;

/// Grid layout of a quilt atlas: `columns x rows` equal-sized sub-images
/// packed into one texture, spanning `viewing_cone_degrees` of horizontal
/// parallax. Validated at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiltLayout {
    columns: u32,
    rows: u32,
    viewing_cone_degrees: f32,
}

/// Rejected quilt configuration. Raised at construction time so malformed
/// layouts never reach per-pixel sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum QuiltLayoutError {
    ZeroColumns,
    ZeroRows,
    InvalidViewingCone(f32),
}

impl fmt::Display for QuiltLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "quilt layout needs at least one column"),
            Self::ZeroRows => write!(f, "quilt layout needs at least one row"),
            Self::InvalidViewingCone(cone) => {
                write!(f, "viewing cone must be in (0, 360] degrees, got {cone}")
            }
        }
    }
}

impl std::error::Error for QuiltLayoutError {}

impl QuiltLayout {
    pub fn new(columns: u32, rows: u32, viewing_cone_degrees: f32) -> Result<Self, QuiltLayoutError> {
        if columns == 0 {
            return Err(QuiltLayoutError::ZeroColumns);
        }
        if rows == 0 {
            return Err(QuiltLayoutError::ZeroRows);
        }
        if !viewing_cone_degrees.is_finite()
            || viewing_cone_degrees <= 0.0
            || viewing_cone_degrees > 360.0
        {
            return Err(QuiltLayoutError::InvalidViewingCone(viewing_cone_degrees));
        }
        Ok(Self {
            columns,
            rows,
            viewing_cone_degrees,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn viewing_cone_degrees(&self) -> f32 {
        self.viewing_cone_degrees
    }

    pub fn total_cells(&self) -> u32 {
        self.columns * self.rows
    }

    /// Half the viewing cone, in radians. Angles beyond this clamp to an
    /// edge view.
    pub fn max_angle(&self) -> f32 {
        (self.viewing_cone_degrees * 0.5).to_radians()
    }

    /// Size of one cell in normalised atlas UV space.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(1.0 / self.columns as f32, 1.0 / self.rows as f32)
    }
}

/// Quilt settings parsed from a texture file stem ending in
/// `qs{columns}x{rows}a{aspect}`, e.g. `christmas_tree_2023_qs8x12a0.75`.
/// The aspect is the per-view aspect ratio baked by the quilt generator;
/// the viewer only needs columns and rows but keeps the aspect around for
/// sanity checks by callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiltStem {
    pub columns: u32,
    pub rows: u32,
    pub aspect: f32,
}

/// Parse the `qs{c}x{r}a{a}` suffix convention from a file stem.
/// Returns `None` when the stem does not carry quilt settings.
pub fn parse_quilt_stem(stem: &str) -> Option<QuiltStem> {
    let tail = match stem.rfind("_qs") {
        Some(pos) => &stem[pos + 3..],
        None => stem.strip_prefix("qs")?,
    };

    let (columns, rest) = tail.split_once('x')?;
    let (rows, aspect) = rest.split_once('a')?;

    let columns: u32 = columns.parse().ok()?;
    let rows: u32 = rows.parse().ok()?;
    let aspect: f32 = aspect.parse().ok()?;

    if columns == 0 || rows == 0 || !aspect.is_finite() || aspect <= 0.0 {
        return None;
    }

    Some(QuiltStem {
        columns,
        rows,
        aspect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_layout() {
        let layout = QuiltLayout::new(8, 12, 58.0).unwrap();
        assert_eq!(layout.total_cells(), 96);
        assert!((layout.max_angle() - 29.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(layout.cell_size(), Vec2::new(1.0 / 8.0, 1.0 / 12.0));
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert_eq!(
            QuiltLayout::new(0, 12, 58.0),
            Err(QuiltLayoutError::ZeroColumns)
        );
        assert_eq!(
            QuiltLayout::new(8, 0, 58.0),
            Err(QuiltLayoutError::ZeroRows)
        );
    }

    #[test]
    fn rejects_bad_viewing_cones() {
        for cone in [0.0, -10.0, 361.0, f32::NAN, f32::INFINITY] {
            assert!(QuiltLayout::new(8, 12, cone).is_err(), "cone {cone} accepted");
        }
        // 360 is the inclusive upper bound
        assert!(QuiltLayout::new(8, 12, 360.0).is_ok());
    }

    #[test]
    fn parses_quilt_stem_suffix() {
        let parsed = parse_quilt_stem("christmas_tree_2023_qs8x12a0.75").unwrap();
        assert_eq!(parsed.columns, 8);
        assert_eq!(parsed.rows, 12);
        assert!((parsed.aspect - 0.75).abs() < 1e-6);
    }

    #[test]
    fn parses_bare_quilt_stem() {
        let parsed = parse_quilt_stem("qs6x9a1.0").unwrap();
        assert_eq!((parsed.columns, parsed.rows), (6, 9));
    }

    #[test]
    fn rejects_malformed_stems() {
        for stem in [
            "christmas_tree_2023",
            "card_qs8x12",
            "card_qsAx12a0.75",
            "card_qs0x12a0.75",
            "card_qs8x12a-1.0",
        ] {
            assert!(parse_quilt_stem(stem).is_none(), "stem {stem} parsed");
        }
    }
}
