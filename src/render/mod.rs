//! Camera-relative rendering pipeline.
//!
//! Overview
//! - `camera` – viewport window into world space with clamped movement
//! - `sprite` – immutable sprite descriptor (texture key, atlas frame, flip)
//! - `renderer` – resolves handles, computes geometry, culls, tiles and
//!   submits draw commands

pub mod camera;
pub mod renderer;
pub mod sprite;

pub use camera::Camera;
pub use renderer::Renderer;
pub use sprite::Sprite;
