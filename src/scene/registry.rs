use std::collections::HashMap;

use glam::Vec3;
use log::debug;

use super::object::{Geometry, ObjectHandle, SceneObject};
use crate::math::Color;
use crate::render::{EntryTransform, SceneBinding, SceneEntry, SceneGraph, Shape};

/// Below this many slots tombstones are never compacted
const COMPACT_MIN_SLOTS: usize = 64;

/// Owns the live pickable objects and keeps the render scene graph in step.
///
/// Every handle in the registry has exactly one live scene graph entry and
/// the registry owns the binding, so nothing else can add or drop entries
/// behind its back. Storage is a slot vector in insertion order plus a
/// handle index, giving O(1) lookup and removal.
#[derive(Debug)]
pub struct ObjectRegistry<S: SceneBinding = SceneGraph> {
    scene: S,
    slots: Vec<Option<SceneObject>>,
    index: HashMap<ObjectHandle, usize>,
    next_handle: u64,
    default_color: Color,
}

impl<S: SceneBinding> ObjectRegistry<S> {
    pub const DEFAULT_COLOR: Color = Color::rgb(1.0, 1.0, 0x77 as f32 / 255.0);

    pub fn new(scene: S) -> Self {
        Self {
            scene,
            slots: Vec::new(),
            index: HashMap::new(),
            next_handle: 0,
            default_color: Self::DEFAULT_COLOR,
        }
    }

    /// Material color given to objects created from now on
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Allocates a box with the given non-uniform scale at `position`, casting
    /// shadows, and mirrors it into the scene graph.
    pub fn create(&mut self, scale: Vec3, position: Vec3) -> ObjectHandle {
        let handle = ObjectHandle(self.next_handle);
        self.next_handle += 1;

        let scene_id = self.scene.add_to_scene(SceneEntry {
            shape: Shape::Box,
            transform: EntryTransform::new(position, scale),
            color: self.default_color,
            cast_shadow: true,
            receive_shadow: false,
        });

        let object = SceneObject {
            handle,
            scene_id,
            position,
            scale,
            geometry: Geometry::UnitBox,
            color: self.default_color,
            cast_shadow: true,
        };

        self.index.insert(handle, self.slots.len());
        self.slots.push(Some(object));
        handle
    }

    /// Drops the object and its scene graph entry. Absent handles are a no-op.
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<SceneObject> {
        let slot = self.index.remove(&handle)?;
        let object = self.slots[slot].take()?;
        self.scene.remove_from_scene(object.scene_id);
        debug!("removed {handle}, {} live", self.index.len());

        if self.slots.len() >= COMPACT_MIN_SLOTS && self.index.len() * 2 < self.slots.len() {
            self.compact();
        }

        Some(object)
    }

    /// Recolors the object and its scene graph entry. Returns false if absent.
    pub fn set_color(&mut self, handle: ObjectHandle, color: Color) -> bool {
        let Some(object) = self.get_mut(handle) else {
            return false;
        };
        object.color = color;
        let scene_id = object.scene_id;
        self.scene.set_color(scene_id, color);
        true
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        let slot = *self.index.get(&handle)?;
        self.slots[slot].as_ref()
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        let slot = *self.index.get(&handle)?;
        self.slots[slot].as_mut()
    }

    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.index.contains_key(&handle)
    }

    /// Live objects in insertion order. Restartable; call once per frame.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        self.slots.iter().flatten()
    }

    pub fn handles(&self) -> impl Iterator<Item = ObjectHandle> + '_ {
        self.iter().map(SceneObject::handle)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    fn compact(&mut self) {
        let before = self.slots.len();
        self.slots.retain(Option::is_some);
        for (slot, object) in self.slots.iter().flatten().enumerate() {
            self.index.insert(object.handle, slot);
        }
        debug!("compacted registry slots {before} -> {}", self.slots.len());
    }
}

impl Default for ObjectRegistry<SceneGraph> {
    fn default() -> Self {
        Self::new(SceneGraph::default())
    }
}
