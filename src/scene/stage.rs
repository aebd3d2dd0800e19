use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Color;
use crate::render::{EntryTransform, Lighting, SceneBinding, SceneEntry, SceneGraph, Shape};

/// Non-pickable scenery: floor and lights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stage {
    pub floor_size: f32,
    pub floor_position: Vec3,
    pub floor_color: Color,
    pub lighting: Lighting,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            floor_size: 30.0,
            floor_position: Vec3::new(-1.0, -0.5, 10.0),
            floor_color: Color::rgb(0x77 as f32 / 255.0, 0x77 as f32 / 255.0, 0x77 as f32 / 255.0),
            lighting: Lighting::default(),
        }
    }
}

impl Stage {
    /// Scene graph holding the scenery, ready to back an object registry
    pub fn build(&self) -> SceneGraph {
        let mut graph = SceneGraph::new(self.lighting);
        graph.add_to_scene(SceneEntry {
            shape: Shape::Plane,
            transform: EntryTransform::new(
                self.floor_position,
                Vec3::new(self.floor_size, self.floor_size, 1.0),
            )
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            color: self.floor_color,
            cast_shadow: false,
            receive_shadow: true,
        });
        graph
    }
}
