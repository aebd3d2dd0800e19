pub mod audio;
pub mod clock;
pub mod frame_loop;
pub mod input;
mod input_adapter;
pub mod interaction;
pub mod picking;
pub mod pointer;
pub mod viewport;

pub use audio::{ImpactSound, ImpactTrigger, LogImpactSound, DEFAULT_IMPACT_THRESHOLD};
pub use clock::{FpsCounter, FrameClock, FrameInfo};
pub use frame_loop::{FrameLoop, FrameReport};
pub use input::FrameInput;
pub use interaction::{
    HoverState, InteractionController, InteractionEvent, InteractionObserver, LogObserver,
};
pub use picking::{PickResult, PickingService};
pub use pointer::{screen_to_ndc, PointerState};
pub use viewport::Viewport;
