use box_picker::math::{intersect_aabb, Ray, AABB};
use glam::Vec3;

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_outside() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0).normalize();
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit AABB");

        assert!((t - 5.0).abs() < 0.001, "Hit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0).normalize();
        let box_min = Vec3::new(5.0, 5.0, 5.0);
        let box_max = Vec3::new(10.0, 10.0, 10.0);

        assert_eq!(intersect_aabb(ray_origin, ray_dir, box_min, box_max), None, "Ray should miss AABB");
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let ray_origin = Vec3::new(5.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0).normalize();
        let box_min = Vec3::new(0.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max)
            .expect("Should return exit distance when ray starts inside");

        assert!((t - 5.0).abs() < 0.001, "Exit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_hits_aabb_at_angle() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 1.0, 1.0).normalize();
        let box_min = Vec3::new(5.0, 5.0, 5.0);
        let box_max = Vec3::new(10.0, 10.0, 10.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit AABB at angle");

        let hit_point = ray_origin + ray_dir * t;
        let bounds = AABB::new(box_min - Vec3::splat(0.001), box_max + Vec3::splat(0.001));
        assert!(bounds.contains_point(hit_point), "Hit point {:?} should be on the AABB", hit_point);
    }

    #[test]
    fn test_ray_pointing_away_from_aabb() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(-1.0, 0.0, 0.0).normalize();
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        assert_eq!(
            intersect_aabb(ray_origin, ray_dir, box_min, box_max),
            None,
            "Ray pointing away should not hit AABB"
        );
    }

    #[test]
    fn test_ray_parallel_to_aabb_face_outside_slab() {
        let ray_origin = Vec3::new(0.0, 2.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        assert_eq!(intersect_aabb(ray_origin, ray_dir, box_min, box_max), None);
    }

    #[test]
    fn test_ray_hits_face_center_y_negative() {
        let ray_origin = Vec3::new(0.0, 10.0, 0.0);
        let ray_dir = Vec3::new(0.0, -1.0, 0.0);
        let box_min = Vec3::new(-1.0, -1.0, -1.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Should hit top face");

        assert!((t - 9.0).abs() < 0.001, "Hit distance should be ~9.0, got {}", t);
    }

    #[test]
    fn test_ray_starts_on_box_surface_pointing_out() {
        let ray_origin = Vec3::new(1.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(-1.0, -1.0, -1.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        assert_eq!(
            intersect_aabb(ray_origin, ray_dir, box_min, box_max),
            None,
            "Leaving the box from its surface is not a hit"
        );
    }

    #[test]
    fn test_ray_starts_on_box_surface_pointing_in() {
        let ray_origin = Vec3::new(-1.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(-1.0, -1.0, -1.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max)
            .expect("Entering the box from its surface should hit the far face");
        assert!((t - 2.0).abs() < 1e-5, "Expected exit distance 2.0, got {}", t);
    }

    #[test]
    fn test_ray_hits_flat_box_xy_plane() {
        let ray_origin = Vec3::new(0.0, 0.0, -5.0);
        let ray_dir = Vec3::new(0.0, 0.0, 1.0);
        let box_min = Vec3::new(-1.0, -1.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 0.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Should hit flat box");

        assert!((t - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_with_two_zero_components() {
        let ray_origin = Vec3::new(0.0, -5.0, 0.0);
        let ray_dir = Vec3::new(0.0, 1.0, 0.0);
        let box_min = Vec3::new(-1.0, -1.0, -1.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Axis-aligned ray should hit");
        assert!((t - 4.0).abs() < 0.001);

        let outside = Vec3::new(2.0, -5.0, 0.0);
        assert_eq!(intersect_aabb(outside, ray_dir, box_min, box_max), None);
    }

    #[test]
    fn test_ray_hits_box_with_tiny_offset() {
        let ray_origin = Vec3::new(0.0, 0.999, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        assert!(intersect_aabb(ray_origin, ray_dir, box_min, box_max).is_some());

        let ray_origin = Vec3::new(0.0, 1.001, 0.0);
        assert!(intersect_aabb(ray_origin, ray_dir, box_min, box_max).is_none());
    }
}

#[cfg(test)]
mod ray_type_tests {
    use super::*;

    #[test]
    fn test_ray_direction_normalization() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.direction - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_ray_at_walks_world_units() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(ray.at(2.0), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_ray_method_matches_free_function() {
        let ray = Ray::new(Vec3::new(-3.0, 0.2, 0.1), Vec3::X);
        let aabb = AABB::from_center_size(Vec3::ZERO, Vec3::ONE);

        assert_eq!(
            ray.intersect_aabb(&aabb),
            intersect_aabb(ray.origin, ray.direction, aabb.min, aabb.max)
        );
        assert!((ray.intersect_aabb(&aabb).unwrap() - 2.5).abs() < 1e-5);
    }
}
