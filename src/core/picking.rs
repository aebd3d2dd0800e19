use super::pointer::PointerState;
use crate::math::Ray;
use crate::scene::{ObjectHandle, SceneObject};
use crate::traits::CameraController;

/// Frame-scoped outcome of a pick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickResult {
    Miss,
    Hit { handle: ObjectHandle, distance: f32 },
}

impl PickResult {
    pub fn handle(&self) -> Option<ObjectHandle> {
        match self {
            PickResult::Miss => None,
            PickResult::Hit { handle, .. } => Some(*handle),
        }
    }

    pub fn distance(&self) -> Option<f32> {
        match self {
            PickResult::Miss => None,
            PickResult::Hit { distance, .. } => Some(*distance),
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, PickResult::Hit { .. })
    }
}

/// Ray-based hit testing against candidate bounding boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct PickingService;

impl PickingService {
    /// Casts from the camera through the pointer. Must run every frame since
    /// the camera may move under a still pointer.
    pub fn cast_ray<'a, C>(
        &self,
        camera: &C,
        pointer: &PointerState,
        candidates: impl IntoIterator<Item = &'a SceneObject>,
    ) -> PickResult
    where
        C: CameraController + ?Sized,
    {
        let ray = camera.ray_through(pointer.ndc());
        self.nearest(&ray, candidates)
    }

    /// Smallest positive hit distance wins; on equal distance the candidate
    /// seen first wins.
    pub fn nearest<'a>(
        &self,
        ray: &Ray,
        candidates: impl IntoIterator<Item = &'a SceneObject>,
    ) -> PickResult {
        let mut best = PickResult::Miss;
        let mut best_distance = f32::INFINITY;

        for object in candidates {
            if let Some(distance) = ray.intersect_aabb(&object.bounds()) {
                if distance < best_distance {
                    best_distance = distance;
                    best = PickResult::Hit {
                        handle: object.handle(),
                        distance,
                    };
                }
            }
        }

        best
    }
}
