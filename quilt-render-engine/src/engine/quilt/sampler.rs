use bevy::prelude::*;
use constants::quilt::{EDGE_FADE_EXPONENT, EDGE_FADE_LIMIT};

use super::layout::QuiltLayout;

/// The pair of quilt cells a viewing angle resolves to, and how far between
/// them the blend sits. Mirrors `assets/shaders/quilt_card.wgsl` exactly so
/// the fragment stage's behaviour can be asserted on the CPU; the debug
/// overlay and the RPC view-state query read it at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBlend {
    pub current: u32,
    pub next: u32,
    pub fraction: f32,
}

/// Map a relative angle into the cone as `[0, 1]`: `-max_angle` lands on 1
/// (last view), `+max_angle` on 0 (first view). Values outside the cone
/// leave `[0, 1]` and clamp downstream.
pub fn normalized_angle(relative_angle: f32, layout: &QuiltLayout) -> f32 {
    let max_angle = layout.max_angle();
    (max_angle - relative_angle) / (2.0 * max_angle)
}

/// Resolve a relative angle to the two adjacent cells to blend between.
/// Both indices clamp to `[0, total_cells - 1]`; an out-of-cone angle
/// degrades to the nearest edge view, never wraps.
pub fn select_views(relative_angle: f32, layout: &QuiltLayout) -> ViewBlend {
    let total = layout.total_cells() as i64;
    let raw = normalized_angle(relative_angle, layout) * layout.total_cells() as f32;

    // GLSL-style fract: always in [0, 1) even for negative raw indices.
    let fraction = raw - raw.floor();

    let current = (raw.floor() as i64).clamp(0, total - 1) as u32;
    let next = (current as i64 + 1).clamp(0, total - 1) as u32;

    ViewBlend {
        current,
        next,
        fraction,
    }
}

/// Transform a card-local UV (origin bottom-left) into the atlas UV of one
/// cell. Cell 0 is the bottom-left sub-image; rows run bottom to top.
pub fn cell_uv(uv: Vec2, index: u32, layout: &QuiltLayout) -> Vec2 {
    let column = index % layout.columns();
    let row = index / layout.columns();
    uv * layout.cell_size()
        + Vec2::new(
            column as f32 / layout.columns() as f32,
            row as f32 / layout.rows() as f32,
        )
}

/// Darkening factor toward the cone boundary: 0 through most of the cone,
/// rising as `|angle| / max_angle` to the fifth power, capped so edge views
/// stay half-visible.
pub fn edge_fade(relative_angle: f32, layout: &QuiltLayout) -> f32 {
    (relative_angle.abs() / layout.max_angle())
        .powf(EDGE_FADE_EXPONENT)
        .clamp(0.0, EDGE_FADE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_layout() -> QuiltLayout {
        QuiltLayout::new(8, 12, 58.0).unwrap()
    }

    #[test]
    fn head_on_angle_resolves_to_the_middle_cell() {
        let layout = standard_layout();
        assert!((normalized_angle(0.0, &layout) - 0.5).abs() < 1e-6);

        let blend = select_views(0.0, &layout);
        assert_eq!(blend.current, 48);
        assert_eq!(blend.next, 49);
    }

    #[test]
    fn cone_edges_resolve_to_edge_cells() {
        let layout = standard_layout();
        let max_angle = layout.max_angle();

        // Looking from the far left of the cone shows the last view...
        let left_edge = select_views(-max_angle, &layout);
        assert_eq!(left_edge.current, 95);
        assert_eq!(left_edge.next, 95);

        // ...and from the far right, the first.
        let right_edge = select_views(max_angle, &layout);
        assert_eq!(right_edge.current, 0);
    }

    #[test]
    fn indices_stay_in_range_for_any_finite_angle() {
        let layout = standard_layout();
        for angle in [
            0.0,
            0.5,
            -0.5,
            layout.max_angle() * 3.0,
            -layout.max_angle() * 3.0,
            std::f32::consts::PI,
            -std::f32::consts::PI,
            1e30,
            -1e30,
        ] {
            let blend = select_views(angle, &layout);
            assert!(blend.current < 96, "current {} at angle {angle}", blend.current);
            assert!(blend.next < 96, "next {} at angle {angle}", blend.next);
            assert!(
                (0.0..1.0).contains(&blend.fraction),
                "fraction {} at angle {angle}",
                blend.fraction
            );
        }
    }

    #[test]
    fn blend_fraction_interpolates_between_adjacent_cells() {
        let layout = standard_layout();
        // normalized = 0.7 -> raw index 67.2
        let angle = -layout.max_angle() * 0.4;
        let blend = select_views(angle, &layout);
        assert_eq!(blend.current, 67);
        assert_eq!(blend.next, 68);
        assert!((blend.fraction - 0.2).abs() < 1e-3);
    }

    #[test]
    fn cell_uv_addresses_the_grid_row_major() {
        let layout = standard_layout();
        let origin = Vec2::ZERO;

        assert_eq!(cell_uv(origin, 0, &layout), Vec2::ZERO);
        // Cell 8 is the first cell of the second row.
        assert_eq!(cell_uv(origin, 8, &layout), Vec2::new(0.0, 1.0 / 12.0));
        // Cell 95 is the top-right corner of the grid.
        let last = cell_uv(origin, 95, &layout);
        assert!((last.x - 7.0 / 8.0).abs() < 1e-6);
        assert!((last.y - 11.0 / 12.0).abs() < 1e-6);

        // A full-cell UV never leaves the cell.
        let far = cell_uv(Vec2::ONE, 95, &layout);
        assert!(far.x <= 1.0 + 1e-6 && far.y <= 1.0 + 1e-6);
    }

    #[test]
    fn fade_is_zero_head_on_and_half_at_the_boundary() {
        let layout = standard_layout();
        assert_eq!(edge_fade(0.0, &layout), 0.0);
        assert!((edge_fade(layout.max_angle(), &layout) - 0.5).abs() < 1e-6);
        assert!((edge_fade(-layout.max_angle(), &layout) - 0.5).abs() < 1e-6);
        // Beyond the cone the cap holds.
        assert_eq!(edge_fade(layout.max_angle() * 4.0, &layout), 0.5);
    }

    #[test]
    fn fade_rises_monotonically() {
        let layout = standard_layout();
        let max_angle = layout.max_angle();
        let mut previous = -1.0;
        for step in 0..=20 {
            let angle = max_angle * step as f32 / 20.0;
            let fade = edge_fade(angle, &layout);
            assert!(fade >= previous, "fade dropped at step {step}");
            previous = fade;
        }
        // The curve hugs zero through most of the cone.
        assert!(edge_fade(max_angle * 0.5, &layout) < 0.05);
    }

    #[test]
    fn single_cell_quilt_degrades_to_a_plain_texture() {
        let layout = QuiltLayout::new(1, 1, 58.0).unwrap();
        for angle in [-1.0, 0.0, 1.0] {
            let blend = select_views(angle, &layout);
            assert_eq!((blend.current, blend.next), (0, 0));
        }
    }
}
