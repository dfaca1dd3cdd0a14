//! Built-in demo scene.
//!
//! Exercises every renderer path without any asset files on disk: all
//! textures are generated images registered in the cache under `gen/` keys.
//! The scene draws a repeating parallax backdrop, a field of animated atlas
//! crates, one rotating crate, a screen-space badge, and a text overlay
//! (cached TTF font when `assets/fonts/overlay.ttf` exists, else raylib's
//! built-in font).

use std::path::Path;

use log::{error, warn};
use raylib::prelude::*;

use crate::render::{Camera, Renderer, Sprite};
use crate::resource::ResourceCache;
use crate::time::Time;

const BACKDROP_KEY: &str = "gen/backdrop";
const CRATE_KEY: &str = "gen/crate";
const BADGE_KEY: &str = "gen/badge";
const OVERLAY_FONT_PATH: &str = "assets/fonts/overlay.ttf";
const OVERLAY_FONT_SIZE: i32 = 24;

/// Side of one frame in the generated 2x2 crate atlas, in pixels.
const CRATE_FRAME: f32 = 32.0;
/// Seconds each atlas frame stays on screen.
const FRAME_TIME: f32 = 0.25;

/// State of the demo scene: generated texture keys live in the cache, the
/// scene only keeps world positions and animation counters.
pub struct DemoScene {
    crates: Vec<Vector2>,
    spinner_pos: Vector2,
    angle: f32,
    frame: usize,
    frame_timer: f32,
    has_overlay_font: bool,
    backdrop_scale: f32,
    world_size: Vector2,
}

impl DemoScene {
    /// Generate the demo textures, register them in the cache and bound the
    /// camera to a two-screen-wide world.
    pub fn setup(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        camera: &mut Camera,
    ) -> Self {
        let viewport = camera.viewport_size();
        let world_size = Vector2 {
            x: viewport.x * 2.0,
            y: viewport.y,
        };
        camera.set_bounds(Rectangle::new(0.0, 0.0, world_size.x, world_size.y));

        register_generated(
            rl,
            thread,
            cache,
            BACKDROP_KEY,
            Image::gen_image_checked(
                128,
                128,
                16,
                16,
                Color::new(24, 26, 38, 255),
                Color::new(34, 38, 56, 255),
            ),
        );
        // 32-pixel checks over a 64x64 image: a ready-made 2x2 atlas of
        // alternating solid frames.
        register_generated(
            rl,
            thread,
            cache,
            CRATE_KEY,
            Image::gen_image_checked(
                64,
                64,
                32,
                32,
                Color::new(196, 128, 64, 255),
                Color::new(160, 96, 48, 255),
            ),
        );
        register_generated(
            rl,
            thread,
            cache,
            BADGE_KEY,
            Image::gen_image_color(64, 64, Color::new(220, 180, 60, 220)),
        );

        // Scatter crates over the world once; positions stay fixed.
        let mut crates = Vec::with_capacity(24);
        for _ in 0..24 {
            crates.push(Vector2 {
                x: fastrand::f32() * (world_size.x - CRATE_FRAME * 2.0),
                y: fastrand::f32() * (world_size.y - CRATE_FRAME * 2.0),
            });
        }

        let has_overlay_font = Path::new(OVERLAY_FONT_PATH).exists();
        if has_overlay_font {
            if let Err(err) = cache.load_font(rl, thread, OVERLAY_FONT_PATH, OVERLAY_FONT_SIZE) {
                error!("demo: overlay font unavailable: {err}");
            }
        } else {
            warn!("demo: '{OVERLAY_FONT_PATH}' not found, using the built-in font");
        }

        Self {
            crates,
            spinner_pos: Vector2 {
                x: world_size.x * 0.5,
                y: world_size.y * 0.5,
            },
            angle: 0.0,
            frame: 0,
            frame_timer: 0.0,
            has_overlay_font: has_overlay_font
                && cache.fonts().contains(OVERLAY_FONT_PATH, OVERLAY_FONT_SIZE),
            backdrop_scale: viewport.y / 128.0,
            world_size,
        }
    }

    /// Advance the spinner rotation and the atlas frame animation.
    pub fn update(&mut self, time: &Time) {
        self.angle = (self.angle + 90.0 * time.delta()) % 360.0;
        self.frame_timer += time.delta();
        while self.frame_timer >= FRAME_TIME {
            self.frame_timer -= FRAME_TIME;
            self.frame = (self.frame + 1) % 4;
        }
    }

    /// Draw the full scene. Call between `clear_screen` and the end of the
    /// draw scope.
    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        renderer: &Renderer,
        camera: &Camera,
    ) {
        // Backdrop scrolls at half camera speed and repeats horizontally.
        renderer.draw_parallax(
            d,
            thread,
            cache,
            camera,
            &Sprite::new(BACKDROP_KEY),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 0.5, y: 0.0 },
            (true, false),
            Vector2 {
                x: self.backdrop_scale,
                y: self.backdrop_scale,
            },
        );

        let frame_rect = crate_frame_rect(self.frame);
        for (i, pos) in self.crates.iter().enumerate() {
            let sprite = Sprite::new(CRATE_KEY)
                .with_source_rect(frame_rect)
                .with_flip_h(i % 2 == 1);
            renderer.draw_sprite(
                d,
                thread,
                cache,
                camera,
                &sprite,
                *pos,
                Vector2 { x: 2.0, y: 2.0 },
                0.0,
            );
        }

        // One big rotating crate in the middle of the world.
        renderer.draw_sprite(
            d,
            thread,
            cache,
            camera,
            &Sprite::new(CRATE_KEY),
            self.spinner_pos,
            Vector2 { x: 3.0, y: 3.0 },
            self.angle,
        );

        // Screen-space badge, native size, unaffected by the camera.
        renderer.draw_ui_sprite(
            d,
            thread,
            cache,
            &Sprite::new(BADGE_KEY),
            Vector2 { x: 16.0, y: 48.0 },
            None,
        );

        self.draw_overlay(d, thread, cache, camera);
    }

    fn draw_overlay(
        &self,
        d: &mut RaylibDrawHandle,
        thread: &RaylibThread,
        cache: &mut ResourceCache,
        camera: &Camera,
    ) {
        let pos = camera.position();
        let text = format!(
            "FPS: {} | camera: ({:.1}, {:.1}) | world: {}x{} | arrows to move",
            d.get_fps(),
            pos.x,
            pos.y,
            self.world_size.x as i32,
            self.world_size.y as i32
        );
        if self.has_overlay_font {
            match cache.get_font(d, thread, OVERLAY_FONT_PATH, OVERLAY_FONT_SIZE) {
                Ok(font) => {
                    d.draw_text_ex(
                        font,
                        &text,
                        Vector2 { x: 16.0, y: 16.0 },
                        OVERLAY_FONT_SIZE as f32,
                        1.0,
                        Color::RAYWHITE,
                    );
                    return;
                }
                Err(err) => error!("demo: overlay font lost: {err}"),
            }
        }
        d.draw_text(&text, 16, 16, 20, Color::RAYWHITE);
    }
}

/// Source rect of one frame in the 2x2 crate atlas, left-to-right then
/// top-to-bottom.
fn crate_frame_rect(frame: usize) -> Rectangle {
    let col = (frame % 2) as f32;
    let row = ((frame / 2) % 2) as f32;
    Rectangle::new(col * CRATE_FRAME, row * CRATE_FRAME, CRATE_FRAME, CRATE_FRAME)
}

/// Upload a generated image and register it under `key` with crisp scaling.
fn register_generated(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cache: &mut ResourceCache,
    key: &str,
    image: Image,
) {
    match rl.load_texture_from_image(thread, &image) {
        Ok(mut texture) => {
            texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
            cache.insert_texture(key, texture);
        }
        Err(reason) => error!("demo: failed to upload generated texture '{key}': {reason}"),
    }
}
