use glam::Vec2;

use super::viewport::Viewport;

/// Latest pointer position in normalized device coordinates.
///
/// Overwritten by pointer-move events and read, never consumed, by the frame
/// tick, so a still pointer resolves again every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    ndc: Vec2,
}

impl PointerState {
    /// Screen coordinates have their origin top-left with y down
    pub fn update(&mut self, screen_x: f32, screen_y: f32, viewport: Viewport) {
        self.ndc = screen_to_ndc(screen_x, screen_y, viewport);
    }

    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }
}

/// Maps top-left/y-down pixels to center-origin/y-up coordinates in [-1, 1]
pub fn screen_to_ndc(screen_x: f32, screen_y: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        screen_x / viewport.width as f32 * 2.0 - 1.0,
        -(screen_y / viewport.height as f32 * 2.0 - 1.0),
    )
}
