//! Rendering module
//!
//! Turns a [`crate::sim::FrameView`] into colored triangles. Any 2D backend
//! (canvas, WebGPU, software) can upload the result as-is.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{SceneOptions, build_scene};
pub use vertex::Vertex;
