use super::pointer::PointerState;
use super::viewport::Viewport;

/// Input written by host callbacks between ticks and read by the next tick.
///
/// Callbacks only overwrite fields here; the registry and hover state are
/// touched exclusively inside the frame tick.
#[derive(Debug, Clone)]
pub struct FrameInput {
    pointer: PointerState,
    viewport: Viewport,
    click_pending: bool,
    impacts: Vec<f32>,
}

impl FrameInput {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: PointerState::default(),
            viewport,
            click_pending: false,
            impacts: Vec::new(),
        }
    }

    pub fn pointer_moved(&mut self, screen_x: f32, screen_y: f32) {
        self.pointer.update(screen_x, screen_y, self.viewport);
    }

    pub fn resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Any number of clicks between two ticks collapse into one
    pub fn clicked(&mut self) {
        self.click_pending = true;
    }

    /// Collision strength reported by an external physics collaborator
    pub fn report_impact(&mut self, strength: f32) {
        self.impacts.push(strength);
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn click_pending(&self) -> bool {
        self.click_pending
    }

    /// Reads and clears the click flag
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click_pending)
    }

    pub fn take_impacts(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.impacts)
    }
}
