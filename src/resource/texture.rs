//! Texture cache.
//!
//! Decoded [`Texture2D`] handles keyed by path string, with the load-once /
//! explicit-eviction discipline of [`ResourceStore`]. The cache is the sole
//! owner of its handles; raylib releases the GPU memory when an entry is
//! dropped, so the cache must be dropped before the raylib context.

use log::error;
use raylib::prelude::*;

use crate::resource::error::ResourceError;
use crate::resource::store::ResourceStore;

/// Path-keyed cache of decoded textures.
pub struct TextureCache {
    store: ResourceStore<String, Texture2D>,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    /// Create an empty texture cache.
    pub fn new() -> Self {
        Self {
            store: ResourceStore::new(),
        }
    }

    /// Return the cached texture for `path`, decoding the file if absent.
    ///
    /// Every decoded texture is switched to nearest-neighbor filtering so
    /// scaled tiles keep crisp edges. On decode failure the cache is left
    /// unchanged.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, ResourceError> {
        self.store
            .load_with(path.to_string(), || decode_texture(rl, thread, path))
    }

    /// Fetch-or-load: returns the cached texture, loading it on a miss.
    ///
    /// This read may perform I/O; the miss is logged at warn, not an error.
    pub fn get(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, ResourceError> {
        self.store
            .get_with(path.to_string(), || decode_texture(rl, thread, path))
    }

    /// Native pixel size of the texture for `path`, loading it on a miss.
    pub fn size(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<Vector2, ResourceError> {
        let texture = self.get(rl, thread, path)?;
        Ok(Vector2 {
            x: texture.width as f32,
            y: texture.height as f32,
        })
    }

    /// Register an externally created texture (generated image, text render)
    /// under a caller-chosen key.
    ///
    /// The key need not be a real path; after an unload, `get`/`load` cannot
    /// re-decode such keys.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.store.insert(key.into(), texture);
    }

    /// Whether `path` currently has a decoded texture.
    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(&path.to_string())
    }

    /// Remove and release one texture; warns if the key is absent.
    pub fn unload(&mut self, path: &str) {
        self.store.unload(&path.to_string());
    }

    /// Release all cached textures.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the cache holds no textures.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Decode one texture file and apply nearest-neighbor filtering.
fn decode_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &str,
) -> Result<Texture2D, ResourceError> {
    let mut texture = rl.load_texture(thread, path).map_err(|reason| {
        let err = ResourceError::DecodeFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        };
        error!("{err}");
        err
    })?;
    texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
    Ok(texture)
}
