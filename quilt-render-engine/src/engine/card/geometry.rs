use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::card::CORNER_SEGMENTS;

/// Build a flat rounded-rectangle card face in the XY plane, facing +Z.
/// UVs are normalised to `[0, 1]` across the full rectangle with the origin
/// at the bottom-left corner, which is what the quilt shader's cell
/// addressing expects.
pub fn create_rounded_rect_mesh(width: f32, height: f32, radius: f32) -> Mesh {
    let ring = rounded_rect_outline(width, height, radius, CORNER_SEGMENTS);

    // Triangle fan around the centre vertex.
    let mut positions = Vec::with_capacity(ring.len() + 1);
    positions.push([0.0, 0.0, 0.0]);
    positions.extend(ring.iter().map(|p| [p.x, p.y, 0.0]));

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|p| [p[0] / width + 0.5, p[1] / height + 0.5])
        .collect();

    let ring_len = ring.len() as u32;
    let mut indices = Vec::with_capacity(ring.len() * 3);
    for i in 0..ring_len {
        let next = (i + 1) % ring_len;
        indices.extend_from_slice(&[0, 1 + i, 1 + next]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

/// Counter-clockwise outline of a rounded rectangle centred on the origin:
/// four quarter-circle arcs, with the straight edges emerging as the chords
/// between consecutive arc endpoints.
pub fn rounded_rect_outline(width: f32, height: f32, radius: f32, segments: u32) -> Vec<Vec2> {
    let hw = width * 0.5;
    let hh = height * 0.5;

    use std::f32::consts::{FRAC_PI_2, PI};
    let corners = [
        (Vec2::new(hw - radius, -hh + radius), -FRAC_PI_2), // bottom right
        (Vec2::new(hw - radius, hh - radius), 0.0),         // top right
        (Vec2::new(-hw + radius, hh - radius), FRAC_PI_2),  // top left
        (Vec2::new(-hw + radius, -hh + radius), PI),        // bottom left
    ];

    let mut outline = Vec::with_capacity(corners.len() * (segments as usize + 1));
    for (centre, start_angle) in corners {
        for step in 0..=segments {
            let theta = start_angle + FRAC_PI_2 * step as f32 / segments as f32;
            outline.push(centre + radius * Vec2::new(theta.cos(), theta.sin()));
        }
    }

    outline
}

/// Whether a point in card-local XY space lies inside the rounded
/// rectangle. Used by ray picking so clicks just outside a rounded corner
/// miss the card.
pub fn rounded_rect_contains(point: Vec2, width: f32, height: f32, radius: f32) -> bool {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let p = point.abs();

    if p.x > hw || p.y > hh {
        return false;
    }

    let corner = Vec2::new(hw - radius, hh - radius);
    if p.x <= corner.x || p.y <= corner.y {
        return true;
    }

    p.distance_squared(corner) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_stays_inside_the_bounding_rect() {
        for point in rounded_rect_outline(0.2, 0.3, 0.02, 8) {
            assert!(point.x.abs() <= 0.1 + 1e-6, "x out of bounds: {point}");
            assert!(point.y.abs() <= 0.15 + 1e-6, "y out of bounds: {point}");
        }
    }

    #[test]
    fn outline_touches_all_four_edges() {
        let outline = rounded_rect_outline(0.2, 0.3, 0.02, 8);
        let max_x = outline.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_y = outline.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((max_x - 0.1).abs() < 1e-6);
        assert!((max_y - 0.15).abs() < 1e-6);
    }

    #[test]
    fn mesh_uvs_are_normalised() {
        let mesh = create_rounded_rect_mesh(0.2, 0.3, 0.02);
        let Some(bevy::render::mesh::VertexAttributeValues::Float32x2(values)) =
            mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("uv attribute missing");
        };
        for [u, v] in values {
            assert!((0.0..=1.0).contains(u) && (0.0..=1.0).contains(v));
        }
        // Centre vertex maps to the middle of the quilt cell.
        assert_eq!(values[0], [0.5, 0.5]);
    }

    #[test]
    fn containment_includes_edges_and_excludes_corner_tips() {
        let (w, h, r) = (0.2, 0.3, 0.02);
        assert!(rounded_rect_contains(Vec2::ZERO, w, h, r));
        assert!(rounded_rect_contains(Vec2::new(0.1, 0.0), w, h, r));
        assert!(rounded_rect_contains(Vec2::new(0.0, -0.15), w, h, r));
        // The square corner tip is shaved off by the rounding.
        assert!(!rounded_rect_contains(Vec2::new(0.1, 0.15), w, h, r));
        assert!(!rounded_rect_contains(Vec2::new(0.11, 0.0), w, h, r));
    }
}
