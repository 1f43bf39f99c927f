//! wgpu renderer for the rings scene.
//!
//! The renderer owns the surface, pipelines and GPU buffers. It reads a
//! [`rings_core::Scene`] and [`rings_core::Camera`] each frame and never
//! mutates them.

pub mod batch;
mod error;
mod helpers;
mod mesh;
mod renderer;
mod targets;
mod uniforms;

pub use error::RenderError;
pub use renderer::Renderer;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
