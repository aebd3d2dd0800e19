use super::camera::CameraController;
use crate::core::FrameInfo;
use crate::render::SceneGraph;
use crate::scene::ObjectHandle;

/// Everything a renderer may read for one frame
pub struct RenderFrame<'a> {
    pub scene: &'a SceneGraph,
    pub camera: &'a dyn CameraController,
    pub frame: FrameInfo,
    pub hovered: Option<ObjectHandle>,
    pub live_objects: usize,
}

/// Draws the scene graph; called once at the end of every frame tick
pub trait FrameRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>);
}
