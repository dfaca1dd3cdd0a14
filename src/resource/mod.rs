//! Resource caching subsystem.
//!
//! Decoded assets are loaded once, referenced by key, and evicted only
//! explicitly. Each cache is the sole owner of its decoded handles and hands
//! out borrows tied to its own lifetime.
//!
//! Overview
//! - `store` – generic load-once keyed store shared by the concrete caches
//! - `texture` – decoded textures keyed by path
//! - `font` – rasterized fonts keyed by (path, point size)
//! - `cache` – facade composing both caches behind one interface
//! - `error` – the resource error taxonomy
//!
//! Mutating a cache (`unload`/`clear`) while a draw in the same frame
//! segment still references the entry is forbidden by contract; the borrow
//! checker enforces it at call granularity only.

pub mod cache;
pub mod error;
pub mod font;
pub mod store;
pub mod texture;

pub use cache::ResourceCache;
pub use error::ResourceError;
pub use font::{FontCache, FontKey};
pub use store::ResourceStore;
pub use texture::TextureCache;
