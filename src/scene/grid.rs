use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{ObjectHandle, ObjectRegistry};
use crate::render::SceneBinding;

/// Regular 3D lattice of boxes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Boxes along x, y and z
    pub counts: [usize; 3],
    /// Center of the box at index (0, 0, 0)
    pub origin: Vec3,
    /// Distance between neighbouring box centers
    pub spacing: f32,
    pub box_scale: Vec3,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            counts: [10, 10, 10],
            origin: Vec3::new(-5.0, 1.0, 5.0),
            spacing: 1.1,
            box_scale: Vec3::ONE,
        }
    }
}

impl GridLayout {
    pub fn len(&self) -> usize {
        self.counts.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self, i: usize, j: usize, k: usize) -> Vec3 {
        self.origin + Vec3::new(i as f32, j as f32, k as f32) * self.spacing
    }

    /// Positions with `i` varying fastest, then `j`, then `k`
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let [nx, ny, nz] = self.counts;
        (0..nz).flat_map(move |k| {
            (0..ny).flat_map(move |j| (0..nx).map(move |i| self.position(i, j, k)))
        })
    }

    /// Creates every box of the lattice, returning handles in creation order
    pub fn populate<S: SceneBinding>(&self, registry: &mut ObjectRegistry<S>) -> Vec<ObjectHandle> {
        self.positions()
            .map(|position| registry.create(self.box_scale, position))
            .collect()
    }
}
