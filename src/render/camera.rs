//! World-space camera.
//!
//! The camera is a fixed-size viewport window into world space. Its position
//! is the world coordinate of the viewport's top-left corner, optionally
//! clamped to a world-bound rectangle. All transforms are pure functions of
//! the current state; only the mutators change position.

use raylib::prelude::{Rectangle, Vector2};

/// Viewport window into world space with optional movement bounds.
///
/// Clamp invariant: with bounds set and bound extent >= viewport extent on
/// an axis, position stays in `[bound.min, bound.max - viewport.size]` on
/// that axis; with bound extent < viewport extent, position pins to
/// `bound.min`. A bounds rectangle with a non-positive extent on either axis
/// disables clamping entirely.
#[derive(Clone, Debug)]
pub struct Camera {
    viewport_size: Vector2,
    position: Vector2,
    bounds: Option<Rectangle>,
}

impl Camera {
    /// Create a camera at the world origin with the given viewport size and
    /// no movement bounds.
    pub fn new(viewport_size: Vector2) -> Self {
        Self {
            viewport_size,
            position: Vector2 { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }

    /// Builder-style: start at `position` (re-clamped if bounds are set).
    pub fn with_position(mut self, position: Vector2) -> Self {
        self.set_position(position);
        self
    }

    /// Builder-style: constrain movement to `bounds`.
    pub fn with_bounds(mut self, bounds: Rectangle) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Translate by `offset` and re-clamp.
    pub fn move_by(&mut self, offset: Vector2) {
        self.position.x += offset.x;
        self.position.y += offset.y;
        self.clamp_position();
    }

    /// Set an absolute position and re-clamp.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.clamp_position();
    }

    /// Replace the movement bounds and re-clamp the current position.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
        self.clamp_position();
    }

    /// Remove the movement bounds.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Current world position of the viewport's top-left corner.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Fixed viewport size in screen pixels.
    pub fn viewport_size(&self) -> Vector2 {
        self.viewport_size
    }

    /// Current movement bounds, if any.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    /// World to screen: subtract the camera position.
    pub fn world_to_screen(&self, world_pos: Vector2) -> Vector2 {
        Vector2 {
            x: world_pos.x - self.position.x,
            y: world_pos.y - self.position.y,
        }
    }

    /// World to screen with a per-axis parallax scroll factor. Factor 1
    /// moves fully with the camera (foreground), factor 0 stays fixed
    /// (background).
    pub fn world_to_screen_parallax(&self, world_pos: Vector2, scroll_factor: Vector2) -> Vector2 {
        Vector2 {
            x: world_pos.x - self.position.x * scroll_factor.x,
            y: world_pos.y - self.position.y * scroll_factor.y,
        }
    }

    /// Screen to world: add the camera position.
    pub fn screen_to_world(&self, screen_pos: Vector2) -> Vector2 {
        Vector2 {
            x: screen_pos.x + self.position.x,
            y: screen_pos.y + self.position.y,
        }
    }

    // The camera view (position .. position + viewport) must stay inside
    // the bounds. When the viewport is larger than the bounds on an axis,
    // max falls below min and the position pins to bound.min.
    fn clamp_position(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let min_x = bounds.x;
        let min_y = bounds.y;
        let max_x = (bounds.x + bounds.width - self.viewport_size.x).max(min_x);
        let max_y = (bounds.y + bounds.height - self.viewport_size.y).max(min_y);
        self.position.x = self.position.x.clamp(min_x, max_x);
        self.position.y = self.position.y.clamp(min_y, max_y);
    }
}
