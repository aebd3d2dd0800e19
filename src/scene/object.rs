use std::fmt;

use glam::Vec3;

use crate::math::{Color, AABB};
use crate::render::SceneId;

/// Opaque identity of a pickable object. Never reused within a registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub(crate) u64);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Bounding geometry used for hit testing, shared by every object of a kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// 1x1x1 box centered on the object's position
    UnitBox,
}

impl Geometry {
    pub fn local_size(self) -> Vec3 {
        match self {
            Geometry::UnitBox => Vec3::ONE,
        }
    }
}

/// A pickable, removable unit. Owned by the `ObjectRegistry`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub(crate) handle: ObjectHandle,
    pub(crate) scene_id: SceneId,
    pub(crate) position: Vec3,
    pub(crate) scale: Vec3,
    pub(crate) geometry: Geometry,
    pub(crate) color: Color,
    pub(crate) cast_shadow: bool,
}

impl SceneObject {
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Mirrored entry in the render scene graph
    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cast_shadow(&self) -> bool {
        self.cast_shadow
    }

    /// World-space bounds of the geometry under this object's transform
    pub fn bounds(&self) -> AABB {
        AABB::from_center_size(self.position, self.geometry.local_size() * self.scale)
    }
}
