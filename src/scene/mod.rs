mod grid;
mod object;
mod registry;
mod stage;

pub use grid::GridLayout;
pub use object::{Geometry, ObjectHandle, SceneObject};
pub use registry::ObjectRegistry;
pub use stage::Stage;
