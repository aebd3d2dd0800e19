pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod render;
pub mod scene;
pub mod traits;
