use bevy::prelude::*;

use crate::engine::card::geometry::rounded_rect_contains;
use crate::engine::card::spawn::CardExtent;

/// Ray/card intersection: transform the ray into card-local space,
/// intersect the card's plane, then test the rounded-rect footprint so
/// clicks just outside a rounded corner miss. Returns Some(t) or None.
pub fn ray_hits_card(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    extent: &CardExtent,
) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);

    // Parallel to the card plane
    if d_local.z.abs() < 1e-6 {
        return None;
    }

    let t = -o_local.z / d_local.z;
    if t <= 0.0 {
        return None;
    }

    let hit = o_local + d_local * t;
    rounded_rect_contains(
        hit.truncate(),
        extent.width,
        extent.height,
        extent.corner_radius,
    )
    .then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_extent() -> CardExtent {
        CardExtent {
            width: 0.2,
            height: 0.3,
            corner_radius: 0.02,
        }
    }

    #[test]
    fn head_on_ray_hits_the_centre() {
        let t = ray_hits_card(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            &GlobalTransform::IDENTITY,
            &card_extent(),
        );
        assert!((t.unwrap() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn ray_through_a_shaved_corner_misses() {
        // Aim at the square corner tip, which the rounding removes.
        let t = ray_hits_card(
            Vec3::new(0.1, 0.15, 5.0),
            Vec3::NEG_Z,
            &GlobalTransform::IDENTITY,
            &card_extent(),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let t = ray_hits_card(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            &GlobalTransform::IDENTITY,
            &card_extent(),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn parallel_ray_misses() {
        let t = ray_hits_card(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::X,
            &GlobalTransform::IDENTITY,
            &card_extent(),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn respects_the_card_transform() {
        // Card yawed 90 degrees faces +X; a ray coming down +X hits it.
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 1.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let t = ray_hits_card(Vec3::new(3.0, 1.0, 0.0), Vec3::NEG_X, &xf, &card_extent());
        assert!((t.unwrap() - 3.0).abs() < 1e-4);

        // The same ray misses the unrotated card edge-on.
        let unrotated = GlobalTransform::from(Transform::from_xyz(0.0, 1.0, 0.0));
        assert_eq!(
            ray_hits_card(Vec3::new(3.0, 1.0, 0.0), Vec3::NEG_X, &unrotated, &card_extent()),
            None
        );
    }
}
