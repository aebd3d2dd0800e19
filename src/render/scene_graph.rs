use std::collections::BTreeMap;
use std::fmt;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Handle of an entry in the render scene graph
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u64);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}

/// Geometry drawn for an entry
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit cube centered on the origin
    Box,
    /// Unit square in the XY plane, facing +Z
    Plane,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntryTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl EntryTransform {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEntry {
    pub shape: Shape,
    pub transform: EntryTransform,
    pub color: Color,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    /// Light shines from here towards the origin
    pub position: Vec3,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
    /// Half extent of the orthographic shadow camera
    pub shadow_extent: f32,
    pub shadow_far: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 2.1,
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                intensity: 0.6,
                position: Vec3::new(5.0, 5.0, 5.0),
                cast_shadow: true,
                shadow_map_size: 1024,
                shadow_extent: 7.0,
                shadow_far: 15.0,
            },
        }
    }
}

/// Render engine binding consumed by the object registry
pub trait SceneBinding {
    fn add_to_scene(&mut self, entry: SceneEntry) -> SceneId;

    fn remove_from_scene(&mut self, id: SceneId);

    fn set_color(&mut self, id: SceneId, color: Color);

    fn contains(&self, id: SceneId) -> bool;
}

/// CPU-side scene graph read by the renderer each frame
#[derive(Debug, Default)]
pub struct SceneGraph {
    entries: BTreeMap<SceneId, SceneEntry>,
    next_id: u64,
    lighting: Lighting,
    revision: u64,
}

impl SceneGraph {
    pub fn new(lighting: Lighting) -> Self {
        Self {
            lighting,
            ..Self::default()
        }
    }

    pub fn get(&self, id: SceneId) -> Option<&SceneEntry> {
        self.entries.get(&id)
    }

    /// Entries in creation order
    pub fn entries(&self) -> impl Iterator<Item = (SceneId, &SceneEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Bumped on every structural or color change
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl SceneBinding for SceneGraph {
    fn add_to_scene(&mut self, entry: SceneEntry) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, entry);
        self.revision += 1;
        id
    }

    fn remove_from_scene(&mut self, id: SceneId) {
        if self.entries.remove(&id).is_some() {
            self.revision += 1;
        }
    }

    fn set_color(&mut self, id: SceneId, color: Color) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.color = color;
            self.revision += 1;
        }
    }

    fn contains(&self, id: SceneId) -> bool {
        self.entries.contains_key(&id)
    }
}
