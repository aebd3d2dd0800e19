pub mod gpu;
mod scene_graph;

pub use gpu::BoxRenderer;

pub use scene_graph::{
    AmbientLight, DirectionalLight, EntryTransform, Lighting, SceneBinding, SceneEntry, SceneGraph,
    SceneId, Shape,
};
