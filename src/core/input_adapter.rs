use log::debug;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::input::FrameInput;
use super::viewport::Viewport;

impl FrameInput {
    /// Bridges a winit event into frame input. Returns true if the event was used.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(position.x as f32, position.y as f32);
                true
            }
            // A click completes on release, like a DOM click
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.clicked();
                true
            }
            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the last real viewport
                if size.width == 0 || size.height == 0 {
                    debug!("ignoring degenerate resize {}x{}", size.width, size.height);
                    return false;
                }
                self.resized(Viewport::new(size.width, size.height));
                true
            }
            _ => false,
        }
    }
}
