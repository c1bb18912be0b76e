//! WebGPU rendering module
//!
//! The scene is rebuilt every frame as a flat colored triangle list in arena
//! pixel space; the pipeline maps it to clip space and draws it in one call.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
