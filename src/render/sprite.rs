//! Sprite descriptor.

use raylib::prelude::Rectangle;

/// A sprite references a cached texture by key, optionally selects a source
/// sub-rectangle (one frame of an atlas) and can be flipped horizontally.
///
/// Immutable value; it does not own the texture. Without a source rect the
/// renderer samples the whole texture.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub source_rect: Option<Rectangle>,
    pub flip_h: bool,
}

impl Sprite {
    /// Create a sprite covering the whole texture, unflipped.
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            source_rect: None,
            flip_h: false,
        }
    }

    /// Builder-style: select an atlas frame.
    pub fn with_source_rect(mut self, rect: Rectangle) -> Self {
        self.source_rect = Some(rect);
        self
    }

    /// Builder-style: set the horizontal flip flag.
    pub fn with_flip_h(mut self, flip: bool) -> Self {
        self.flip_h = flip;
        self
    }
}
