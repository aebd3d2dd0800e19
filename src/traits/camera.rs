use glam::{Mat4, Vec2, Vec3};

use crate::math::Ray;

/// Camera movement and projection abstraction
pub trait CameraController {
    /// Advance controls by elapsed time
    fn update(&mut self, delta_time: f32);

    /// Combined projection * view, wgpu clip space (depth in [0, 1])
    fn view_projection(&self) -> Mat4;

    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Viewport width / height changed
    fn set_aspect(&mut self, aspect: f32);

    /// Ray from the camera through a point in normalized device coordinates
    fn ray_through(&self, ndc: Vec2) -> Ray {
        let far = self
            .view_projection()
            .inverse()
            .project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let origin = self.position();
        Ray::new(origin, far - origin)
    }
}
