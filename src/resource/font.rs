//! Font cache.
//!
//! Rasterized [`Font`] objects keyed by `(path, point size)`. Two point
//! sizes of the same file are distinct entries. A non-positive point size is
//! rejected before the cache or the rasterizer is touched.

use std::fmt;

use log::error;
use raylib::prelude::*;

use crate::resource::error::ResourceError;
use crate::resource::store::ResourceStore;

/// Cache key for a rasterized font: the file path plus the point size it was
/// rasterized at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub path: String,
    pub point_size: i32,
}

impl FontKey {
    /// Build a key, rejecting non-positive point sizes before any I/O.
    pub fn new(path: impl Into<String>, point_size: i32) -> Result<Self, ResourceError> {
        let path = path.into();
        if point_size <= 0 {
            let err = ResourceError::InvalidPointSize { path, point_size };
            error!("{err}");
            return Err(err);
        }
        Ok(Self { path, point_size })
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}pt)", self.path, self.point_size)
    }
}

/// `(path, point size)`-keyed cache of rasterized fonts.
pub struct FontCache {
    store: ResourceStore<FontKey, Font>,
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCache {
    /// Create an empty font cache.
    pub fn new() -> Self {
        Self {
            store: ResourceStore::new(),
        }
    }

    /// Return the cached font for `(path, point_size)`, rasterizing the file
    /// if absent. On failure the cache is left unchanged.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        point_size: i32,
    ) -> Result<&Font, ResourceError> {
        let key = FontKey::new(path, point_size)?;
        self.store
            .load_with(key, || decode_font(rl, thread, path, point_size))
    }

    /// Fetch-or-load: returns the cached font, rasterizing it on a miss.
    ///
    /// This read may perform I/O; the miss is logged at warn, not an error.
    pub fn get(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        point_size: i32,
    ) -> Result<&Font, ResourceError> {
        let key = FontKey::new(path, point_size)?;
        self.store
            .get_with(key, || decode_font(rl, thread, path, point_size))
    }

    /// Whether `(path, point_size)` currently has a rasterized font.
    pub fn contains(&self, path: &str, point_size: i32) -> bool {
        self.store.contains(&FontKey {
            path: path.to_string(),
            point_size,
        })
    }

    /// Remove and release one font; warns if the key is absent.
    pub fn unload(&mut self, path: &str, point_size: i32) {
        self.store.unload(&FontKey {
            path: path.to_string(),
            point_size,
        });
    }

    /// Release all cached fonts.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of cached fonts.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the cache holds no fonts.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Rasterize one font file at the given point size.
fn decode_font(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &str,
    point_size: i32,
) -> Result<Font, ResourceError> {
    rl.load_font_ex(thread, path, point_size, None).map_err(|reason| {
        let err = ResourceError::DecodeFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        };
        error!("{err}");
        err
    })
}
