//! Resource error taxonomy.
//!
//! Every fallible cache and renderer-resolve operation reports one of these
//! variants. Per-draw errors are never fatal: the renderer logs them and
//! skips the offending draw, and the frame continues.

use thiserror::Error;

/// Errors produced by the resource caches and by sprite resolution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResourceError {
    /// A font was requested with a non-positive point size. Rejected before
    /// any I/O; the cache is left untouched.
    #[error("invalid point size {point_size} for font '{path}'")]
    InvalidPointSize { path: String, point_size: i32 },

    /// A sprite carries an explicit source rect with a non-positive
    /// dimension.
    #[error("invalid source rect {width}x{height} for texture '{key}'")]
    InvalidSourceRect { key: String, width: f32, height: f32 },

    /// The underlying provider could not produce a decoded handle. The
    /// cache is left unchanged; a later `get`/`load` call is the retry path.
    #[error("failed to decode '{path}': {reason}")]
    DecodeFailed { path: String, reason: String },
}
