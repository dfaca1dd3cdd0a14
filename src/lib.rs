//! Pyrite 2D engine library.
//!
//! Exposes the engine's resource caches, rendering pipeline and utilities
//! for use in integration tests and as a reusable library.

pub mod app;
pub mod config;
pub mod demo;
pub mod render;
pub mod resource;
pub mod time;
