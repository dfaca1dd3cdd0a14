//! Application bootstrap and frame loop.
//!
//! [`App`] is a thin wrapper over raylib's windowing: it builds the window
//! from [`EngineConfig`], constructs the session-lived engine pieces
//! (resource cache, renderer, camera, time, demo scene) and runs the
//! synchronous frame loop:
//! poll input → advance time → update → clear → draws → present.
//!
//! One thread owns everything; there is no internal locking. The frame is
//! presented when the draw scope closes (drop of the draw handle).

use log::info;
use raylib::prelude::*;

use crate::config::EngineConfig;
use crate::demo::DemoScene;
use crate::render::{Camera, Renderer};
use crate::resource::ResourceCache;
use crate::time::Time;

/// World units per second the arrow keys move the camera.
const CAMERA_SPEED: f32 = 400.0;

/// Owns the engine configuration and drives the session from window
/// creation to shutdown.
pub struct App {
    config: EngineConfig,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Open the window and run the frame loop until a close is requested.
    pub fn run(self) {
        let (width, height) = self.config.window_size();

        let mut builder = raylib::init();
        builder
            .size(width as i32, height as i32)
            .resizable()
            .title(&self.config.window_title);
        if self.config.vsync {
            builder.vsync();
        }
        if self.config.fullscreen {
            builder.fullscreen();
        }
        let (mut rl, thread) = builder.build();
        rl.set_target_fps(self.config.target_fps);

        // Declared after `rl` so the caches drop before the raylib context
        // and every decoded handle is released while the context is alive.
        let mut cache = ResourceCache::new();
        let mut renderer = Renderer::new();
        renderer.set_draw_color(16, 18, 28, 255);
        let mut camera = Camera::new(Vector2 {
            x: width as f32,
            y: height as f32,
        });
        let mut time = Time::default();

        let mut scene = DemoScene::setup(&mut rl, &thread, &mut cache, &mut camera);

        info!("Entering the main loop");
        while !rl.window_should_close() {
            let dt = rl.get_frame_time();
            time.update(dt);

            camera.move_by(camera_motion(&rl, CAMERA_SPEED * time.delta()));
            scene.update(&time);

            let mut d = rl.begin_drawing(&thread);
            renderer.clear_screen(&mut d);
            scene.draw(&mut d, &thread, &mut cache, &renderer, &camera);
            // `d` drops here and presents the frame.
        }
        info!("Window close requested, shutting down");
    }
}

/// Held-arrow-key camera offset for this frame.
fn camera_motion(rl: &RaylibHandle, step: f32) -> Vector2 {
    let mut offset = Vector2 { x: 0.0, y: 0.0 };
    if rl.is_key_down(KeyboardKey::KEY_LEFT) {
        offset.x -= step;
    }
    if rl.is_key_down(KeyboardKey::KEY_RIGHT) {
        offset.x += step;
    }
    if rl.is_key_down(KeyboardKey::KEY_UP) {
        offset.y -= step;
    }
    if rl.is_key_down(KeyboardKey::KEY_DOWN) {
        offset.y += step;
    }
    offset
}
