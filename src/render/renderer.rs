//! Sprite renderer.
//!
//! Consumes the resource cache and the camera to draw sprite descriptors
//! onto the raylib target surface. Every draw resolves its texture handle
//! through the cache (which may load on a miss), computes screen geometry
//! via the camera, culls or tiles, and submits draw commands.
//!
//! Per-draw errors are always non-fatal: the offending draw is logged and
//! skipped, and the frame continues. Required order per frame:
//! [`clear_screen`](Renderer::clear_screen) → draws → present (the frame is
//! presented when the raylib draw handle drops).

use log::{error, warn};
use raylib::prelude::*;

use crate::render::camera::Camera;
use crate::render::sprite::Sprite;
use crate::resource::{ResourceCache, ResourceError};

/// Issues draw commands for world sprites, parallax layers and UI sprites.
///
/// Holds only the clear color; the target surface, camera and caches are
/// borrowed per call.
pub struct Renderer {
    clear_color: Color,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with a black clear color.
    pub fn new() -> Self {
        Self {
            clear_color: Color::BLACK,
        }
    }

    /// Set the clear color from 8-bit components.
    pub fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.clear_color = Color::new(r, g, b, a);
    }

    /// Set the clear color from float components, clamped to `[0, 1]`.
    pub fn set_draw_color_float(&mut self, r: f32, g: f32, b: f32, a: f32) {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.clear_color = Color::new(to_byte(r), to_byte(g), to_byte(b), to_byte(a));
    }

    /// Current clear color.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Reset the target surface to the clear color. Call once per frame
    /// before any draws.
    pub fn clear_screen(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(self.clear_color);
    }

    /// Draw a world-space sprite.
    ///
    /// `position` is the world coordinate of the sprite's top-left corner;
    /// the destination size is the source size scaled by `scale`. `angle` is
    /// in degrees, rotating around the destination-rect center. Sprites
    /// wholly outside the viewport are skipped silently.
    pub fn draw_sprite(
        &self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        camera: &Camera,
        sprite: &Sprite,
        position: Vector2,
        scale: Vector2,
        angle: f32,
    ) {
        let texture = match cache.get_texture(d, thread, &sprite.tex_key) {
            Ok(texture) => texture,
            Err(err) => {
                error!("draw_sprite: skipping draw: {err}");
                return;
            }
        };
        let src = match resolve_source_rect(sprite, texture_size(texture)) {
            Ok(src) => src,
            Err(err) => {
                error!("draw_sprite: skipping draw: {err}");
                return;
            }
        };

        let screen_pos = camera.world_to_screen(position);
        let dest = Rectangle::new(
            screen_pos.x,
            screen_pos.y,
            src.width * scale.x,
            src.height * scale.y,
        );
        if !is_rect_in_viewport(camera.viewport_size(), dest) {
            return;
        }

        // draw_texture_pro places `origin` at (dest.x, dest.y) and rotates
        // around it, so shift the destination to keep the top-left at the
        // screen position while pivoting at the center.
        let origin = Vector2 {
            x: dest.width * 0.5,
            y: dest.height * 0.5,
        };
        let pivot_dest = Rectangle::new(
            dest.x + origin.x,
            dest.y + origin.y,
            dest.width,
            dest.height,
        );
        d.draw_texture_pro(
            texture,
            flip_source(src, sprite.flip_h),
            pivot_dest,
            origin,
            angle,
            Color::WHITE,
        );
    }

    /// Draw a parallax layer.
    ///
    /// The layer scrolls at `scroll_factor` relative to the camera. On each
    /// axis with `repeat` enabled the tile repeats across the whole viewport
    /// extent; with repeat disabled a single tile is drawn, clipped so its
    /// far edge does not exceed the viewport.
    pub fn draw_parallax(
        &self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        camera: &Camera,
        sprite: &Sprite,
        position: Vector2,
        scroll_factor: Vector2,
        repeat: (bool, bool),
        scale: Vector2,
    ) {
        let texture = match cache.get_texture(d, thread, &sprite.tex_key) {
            Ok(texture) => texture,
            Err(err) => {
                error!("draw_parallax: skipping draw: {err}");
                return;
            }
        };
        let src = match resolve_source_rect(sprite, texture_size(texture)) {
            Ok(src) => src,
            Err(err) => {
                error!("draw_parallax: skipping draw: {err}");
                return;
            }
        };

        let tile_size = Vector2 {
            x: src.width * scale.x,
            y: src.height * scale.y,
        };
        if tile_size.x <= 0.0 || tile_size.y <= 0.0 {
            warn!(
                "draw_parallax: degenerate tile size {}x{} for '{}', nothing drawn",
                tile_size.x, tile_size.y, sprite.tex_key
            );
            return;
        }

        let screen_pos = camera.world_to_screen_parallax(position, scroll_factor);
        for dest in parallax_tiles(screen_pos, tile_size, camera.viewport_size(), repeat) {
            // Non-repeating axes may have trimmed the tile; trim the source
            // proportionally so the texels are not squeezed.
            let tile_src = Rectangle::new(
                src.x,
                src.y,
                src.width * (dest.width / tile_size.x),
                src.height * (dest.height / tile_size.y),
            );
            d.draw_texture_pro(
                texture,
                flip_source(tile_src, sprite.flip_h),
                dest,
                Vector2 { x: 0.0, y: 0.0 },
                0.0,
                Color::WHITE,
            );
        }
    }

    /// Draw a screen-space UI sprite.
    ///
    /// `position` is used raw (no camera transform), the destination size is
    /// `size` if given, else the native source size. UI sprites are never
    /// culled and cannot rotate.
    pub fn draw_ui_sprite(
        &self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        sprite: &Sprite,
        position: Vector2,
        size: Option<Vector2>,
    ) {
        let texture = match cache.get_texture(d, thread, &sprite.tex_key) {
            Ok(texture) => texture,
            Err(err) => {
                error!("draw_ui_sprite: skipping draw: {err}");
                return;
            }
        };
        let src = match resolve_source_rect(sprite, texture_size(texture)) {
            Ok(src) => src,
            Err(err) => {
                error!("draw_ui_sprite: skipping draw: {err}");
                return;
            }
        };

        let dest = ui_dest_rect(position, size, src);
        d.draw_texture_pro(
            texture,
            flip_source(src, sprite.flip_h),
            dest,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}

fn texture_size(texture: &Texture2D) -> Vector2 {
    Vector2 {
        x: texture.width as f32,
        y: texture.height as f32,
    }
}

/// Source rect for one draw: the sprite's explicit rect (validated) or the
/// whole texture.
fn resolve_source_rect(sprite: &Sprite, texture_size: Vector2) -> Result<Rectangle, ResourceError> {
    match sprite.source_rect {
        Some(rect) => {
            if rect.width <= 0.0 || rect.height <= 0.0 {
                return Err(ResourceError::InvalidSourceRect {
                    key: sprite.tex_key.clone(),
                    width: rect.width,
                    height: rect.height,
                });
            }
            Ok(rect)
        }
        None => Ok(Rectangle::new(0.0, 0.0, texture_size.x, texture_size.y)),
    }
}

/// Mirror the source horizontally via a negative source width, which raylib
/// interprets as flipped sampling.
fn flip_source(mut src: Rectangle, flip_h: bool) -> Rectangle {
    if flip_h {
        src.width = -src.width;
    }
    src
}

/// AABB overlap test between a screen-space rect and the viewport at the
/// origin. Touching edges count as visible.
fn is_rect_in_viewport(viewport_size: Vector2, rect: Rectangle) -> bool {
    rect.x + rect.width >= 0.0
        && rect.x <= viewport_size.x
        && rect.y + rect.height >= 0.0
        && rect.y <= viewport_size.y
}

/// Tiling start and exclusive stop for one parallax axis.
///
/// Repeating: the first tile starts one tile before the floored phase of the
/// screen position, so tiles cover the viewport from edge to edge with pitch
/// equal to the tile extent. Non-repeating: one tile at the screen position,
/// stopping at the viewport edge.
fn tile_axis(screen_pos: f32, tile_extent: f32, viewport_extent: f32, repeat: bool) -> (f32, f32) {
    if repeat {
        (
            screen_pos.rem_euclid(tile_extent) - tile_extent,
            viewport_extent,
        )
    } else {
        (screen_pos, (screen_pos + tile_extent).min(viewport_extent))
    }
}

/// Destination rects for every visible parallax tile, trimmed on
/// non-repeating axes so no tile crosses the viewport's far edge.
fn parallax_tiles(
    screen_pos: Vector2,
    tile_size: Vector2,
    viewport_size: Vector2,
    repeat: (bool, bool),
) -> Vec<Rectangle> {
    if tile_size.x <= 0.0 || tile_size.y <= 0.0 {
        return Vec::new();
    }
    let (start_x, stop_x) = tile_axis(screen_pos.x, tile_size.x, viewport_size.x, repeat.0);
    let (start_y, stop_y) = tile_axis(screen_pos.y, tile_size.y, viewport_size.y, repeat.1);

    let mut tiles = Vec::new();
    let mut y = start_y;
    while y < stop_y {
        let height = if repeat.1 {
            tile_size.y
        } else {
            (stop_y - y).min(tile_size.y)
        };
        let mut x = start_x;
        while x < stop_x {
            let width = if repeat.0 {
                tile_size.x
            } else {
                (stop_x - x).min(tile_size.x)
            };
            tiles.push(Rectangle::new(x, y, width, height));
            x += tile_size.x;
        }
        y += tile_size.y;
    }
    tiles
}

/// Destination rect for a UI sprite: raw screen position, explicit size
/// override or the native source size.
fn ui_dest_rect(position: Vector2, size: Option<Vector2>, src: Rectangle) -> Rectangle {
    match size {
        Some(size) => Rectangle::new(position.x, position.y, size.x, size.y),
        None => Rectangle::new(position.x, position.y, src.width, src.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const VIEWPORT: Vector2 = Vector2 { x: 640.0, y: 360.0 };

    #[test]
    fn test_clear_color_from_bytes() {
        let mut renderer = Renderer::new();
        assert_eq!(renderer.clear_color(), Color::BLACK);
        renderer.set_draw_color(10, 20, 30, 40);
        assert_eq!(renderer.clear_color(), Color::new(10, 20, 30, 40));
    }

    #[test]
    fn test_clear_color_float_is_clamped() {
        let mut renderer = Renderer::new();
        renderer.set_draw_color_float(-0.5, 0.5, 2.0, 1.0);
        assert_eq!(renderer.clear_color(), Color::new(0, 128, 255, 255));
    }

    #[test]
    fn test_source_rect_defaults_to_whole_texture() {
        let sprite = Sprite::new("a.png");
        let src = resolve_source_rect(&sprite, Vector2 { x: 64.0, y: 32.0 }).unwrap();
        assert!(approx_eq(src.x, 0.0));
        assert!(approx_eq(src.y, 0.0));
        assert!(approx_eq(src.width, 64.0));
        assert!(approx_eq(src.height, 32.0));
    }

    #[test]
    fn test_explicit_source_rect_is_used() {
        let sprite =
            Sprite::new("sheet.png").with_source_rect(Rectangle::new(32.0, 16.0, 32.0, 16.0));
        let src = resolve_source_rect(&sprite, Vector2 { x: 256.0, y: 256.0 }).unwrap();
        assert!(approx_eq(src.x, 32.0));
        assert!(approx_eq(src.width, 32.0));
    }

    #[test]
    fn test_non_positive_source_rect_is_rejected() {
        let sprite = Sprite::new("bad.png").with_source_rect(Rectangle::new(0.0, 0.0, 0.0, 16.0));
        let err = resolve_source_rect(&sprite, Vector2 { x: 64.0, y: 64.0 }).unwrap_err();
        assert!(matches!(err, ResourceError::InvalidSourceRect { .. }));
    }

    #[test]
    fn test_flip_negates_source_width() {
        let src = Rectangle::new(8.0, 0.0, 32.0, 32.0);
        let flipped = flip_source(src, true);
        assert!(approx_eq(flipped.width, -32.0));
        assert!(approx_eq(flipped.x, 8.0));
        let unflipped = flip_source(src, false);
        assert!(approx_eq(unflipped.width, 32.0));
    }

    #[test]
    fn test_cull_rejects_rects_outside_viewport() {
        // Left, right, above, below.
        assert!(!is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(-100.0, 10.0, 50.0, 50.0)
        ));
        assert!(!is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(700.0, 10.0, 50.0, 50.0)
        ));
        assert!(!is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(10.0, -100.0, 50.0, 50.0)
        ));
        assert!(!is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(10.0, 400.0, 50.0, 50.0)
        ));
    }

    #[test]
    fn test_cull_keeps_overlapping_rects() {
        assert!(is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(10.0, 10.0, 50.0, 50.0)
        ));
        // Partially visible across an edge.
        assert!(is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(-25.0, 10.0, 50.0, 50.0)
        ));
        assert!(is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(620.0, 340.0, 50.0, 50.0)
        ));
        // Touching an edge still counts as visible.
        assert!(is_rect_in_viewport(
            VIEWPORT,
            Rectangle::new(-50.0, 0.0, 50.0, 50.0)
        ));
    }

    #[test]
    fn test_repeating_tiles_cover_the_viewport() {
        let tile = Vector2 { x: 64.0, y: 64.0 };
        let tiles = parallax_tiles(
            Vector2 { x: 37.3, y: -12.0 },
            tile,
            VIEWPORT,
            (true, true),
        );
        assert!(!tiles.is_empty());

        let min_x = tiles.iter().map(|t| t.x).fold(f32::INFINITY, f32::min);
        let max_x = tiles
            .iter()
            .map(|t| t.x + t.width)
            .fold(f32::NEG_INFINITY, f32::max);
        let min_y = tiles.iter().map(|t| t.y).fold(f32::INFINITY, f32::min);
        let max_y = tiles
            .iter()
            .map(|t| t.y + t.height)
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(min_x <= 0.0 && max_x >= VIEWPORT.x);
        assert!(min_y <= 0.0 && max_y >= VIEWPORT.y);

        // Pitch equals the tile size on both axes: every origin sits a
        // whole number of tiles away from the first one.
        for t in &tiles {
            assert!(approx_eq(t.width, tile.x));
            assert!(approx_eq(t.height, tile.y));
            assert!(approx_eq((t.x - min_x).rem_euclid(tile.x), 0.0));
            assert!(approx_eq((t.y - min_y).rem_euclid(tile.y), 0.0));
        }
    }

    #[test]
    fn test_repeating_axis_has_no_gaps() {
        let tiles = parallax_tiles(
            Vector2 { x: -500.25, y: 0.0 },
            Vector2 { x: 100.0, y: 360.0 },
            VIEWPORT,
            (true, false),
        );
        let mut xs: Vec<f32> = tiles.iter().map(|t| t.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in xs.windows(2) {
            assert!(approx_eq(pair[1] - pair[0], 100.0));
        }
        assert!(xs[0] <= 0.0);
        assert!(xs[xs.len() - 1] + 100.0 >= VIEWPORT.x);
    }

    #[test]
    fn test_single_tile_is_clipped_to_viewport() {
        let tiles = parallax_tiles(
            Vector2 { x: 600.0, y: 100.0 },
            Vector2 { x: 100.0, y: 50.0 },
            VIEWPORT,
            (false, false),
        );
        assert_eq!(tiles.len(), 1);
        let t = tiles[0];
        assert!(approx_eq(t.x, 600.0));
        assert!(approx_eq(t.width, 40.0));
        assert!(approx_eq(t.height, 50.0));
    }

    #[test]
    fn test_non_repeating_tile_past_viewport_is_dropped() {
        let tiles = parallax_tiles(
            Vector2 { x: 700.0, y: 0.0 },
            Vector2 { x: 100.0, y: 100.0 },
            VIEWPORT,
            (false, false),
        );
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_degenerate_tile_size_yields_no_tiles() {
        let tiles = parallax_tiles(
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 0.0, y: 64.0 },
            VIEWPORT,
            (true, true),
        );
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_ui_dest_uses_native_size_without_override() {
        let dest = ui_dest_rect(
            Vector2 { x: 100.0, y: 100.0 },
            None,
            Rectangle::new(0.0, 0.0, 64.0, 64.0),
        );
        assert!(approx_eq(dest.x, 100.0));
        assert!(approx_eq(dest.y, 100.0));
        assert!(approx_eq(dest.width, 64.0));
        assert!(approx_eq(dest.height, 64.0));
    }

    #[test]
    fn test_ui_dest_honors_size_override() {
        let dest = ui_dest_rect(
            Vector2 { x: 10.0, y: 20.0 },
            Some(Vector2 { x: 128.0, y: 32.0 }),
            Rectangle::new(0.0, 0.0, 64.0, 64.0),
        );
        assert!(approx_eq(dest.width, 128.0));
        assert!(approx_eq(dest.height, 32.0));
    }
}
