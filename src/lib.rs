pub mod coords;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod operations;
pub mod render;
pub mod scene;
pub mod shading;
pub mod tessellation;

pub use error::{Result, SketchError};
