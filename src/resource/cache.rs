//! Unified resource cache facade.
//!
//! [`ResourceCache`] owns one [`TextureCache`] and one [`FontCache`] and
//! exposes the union of their operations. It adds no invariants beyond
//! delegation; see the per-cache modules for the caching contract.

use raylib::prelude::*;

use crate::resource::error::ResourceError;
use crate::resource::font::FontCache;
use crate::resource::texture::TextureCache;

/// Session-lived owner of all decoded textures and fonts.
///
/// Created at startup, dropped at shutdown. Must be dropped before the
/// raylib context so handle release happens while the context is alive.
pub struct ResourceCache {
    textures: TextureCache,
    fonts: FontCache,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCache {
    /// Create a cache with empty texture and font stores.
    pub fn new() -> Self {
        Self {
            textures: TextureCache::new(),
            fonts: FontCache::new(),
        }
    }

    /// Load a texture; returns the cached handle if already decoded.
    pub fn load_texture(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, ResourceError> {
        self.textures.load(rl, thread, path)
    }

    /// Fetch-or-load a texture. This read may perform I/O on a miss.
    pub fn get_texture(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, ResourceError> {
        self.textures.get(rl, thread, path)
    }

    /// Native pixel size of a texture, loading it on a miss.
    pub fn texture_size(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<Vector2, ResourceError> {
        self.textures.size(rl, thread, path)
    }

    /// Register an externally created texture under a caller-chosen key.
    pub fn insert_texture(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.textures.insert(key, texture);
    }

    /// Unload one texture; warns if the key is absent.
    pub fn unload_texture(&mut self, path: &str) {
        self.textures.unload(path);
    }

    /// Release all cached textures.
    pub fn clear_textures(&mut self) {
        self.textures.clear();
    }

    /// Load a font; returns the cached handle if already rasterized.
    pub fn load_font(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        point_size: i32,
    ) -> Result<&Font, ResourceError> {
        self.fonts.load(rl, thread, path, point_size)
    }

    /// Fetch-or-load a font. This read may perform I/O on a miss.
    pub fn get_font(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        point_size: i32,
    ) -> Result<&Font, ResourceError> {
        self.fonts.get(rl, thread, path, point_size)
    }

    /// Unload one font; warns if the key is absent.
    pub fn unload_font(&mut self, path: &str, point_size: i32) {
        self.fonts.unload(path, point_size);
    }

    /// Release all cached fonts.
    pub fn clear_fonts(&mut self) {
        self.fonts.clear();
    }

    /// Release every cached texture and font.
    pub fn clear(&mut self) {
        self.textures.clear();
        self.fonts.clear();
    }

    /// Direct access to the texture cache.
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Direct access to the font cache.
    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }
}
