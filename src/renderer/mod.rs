//! WebGPU rendering module
//!
//! Draws the corridor and the player with a single instanced, unlit pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::SceneRenderState;
