use glam::Vec3;

use super::AABB;

/// Hits closer than this are treated as behind the origin
const MIN_HIT_DISTANCE: f32 = 0.001;

/// Half-line with a unit direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized so hit distances are world units
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn intersect_aabb(&self, aabb: &AABB) -> Option<f32> {
        intersect_aabb(self.origin, self.direction, aabb.min, aabb.max)
    }
}

/// Slab test. Returns the nearest positive distance, or the exit distance
/// when the origin sits inside the box or on its surface.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, box_min: Vec3, box_max: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components clamp to a huge inverse instead of dividing by zero
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t_min = (box_min - ray_origin) * inv_dir;
    let t_max = (box_max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near > MIN_HIT_DISTANCE {
        Some(t_near)
    } else {
        (t_far > MIN_HIT_DISTANCE).then_some(t_far)
    }
}
