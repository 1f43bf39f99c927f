//! The assembled scene: configuration, camera, objects and animation.
//!
//! Front-ends own a `Stage`, forward host events to it, and render
//! `scene()` with `camera()` after each successful [`Stage::advance`].

use crate::camera::{orbit_eye, Camera};
use crate::clock::{FrameClock, FrameTick};
use crate::config::{CameraConfig, SceneConfig, SurfaceSize, Viewport};
use crate::constants::*;
use crate::scene::Scene;
use crate::tween::{BounceAnimator, BounceSpec};
use glam::Vec3;
use instant::Instant;

pub struct Stage {
    config: SceneConfig,
    camera: Camera,
    scene: Scene,
    bounce: BounceAnimator,
    clock: FrameClock,
}

impl Stage {
    /// Build config, camera, fog, the three rings, the ground plane and their bounce tweens.
    pub fn new(viewport: Viewport) -> Self {
        let config = SceneConfig::new(viewport);
        let camera = Camera::from_config(&CameraConfig::from_scene(&config));
        let mut scene = Scene::new(config.clear_color, config.fog_density);
        let mut bounce = BounceAnimator::new();
        for (k, &count) in RING_COUNTS.iter().enumerate() {
            let ring = scene.add_ring(RING_BASE_RADIUS * (k + 1) as f32, count);
            bounce.add_ring(&scene, &ring, BounceSpec::default(), BOUNCE_STAGGER_SEC);
        }
        scene.add_ground();
        log::info!(
            "[stage] objects={} rings={} viewport={}x{}@{:.2} camera_distance={:.1}",
            scene.objects().len(),
            scene.rings().len(),
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            config.camera_distance
        );
        Self {
            config,
            camera,
            scene,
            bounce,
            clock: FrameClock::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn bounce(&self) -> &BounceAnimator {
        &self.bounce
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Advance animation, time uniform and camera for a frame at `now`.
    ///
    /// Returns `None` while stopped; the caller should neither render nor
    /// schedule another frame in that case.
    pub fn advance(&mut self, now: Instant) -> Option<FrameTick> {
        let tick = self.clock.tick(now)?;
        self.bounce.step(tick.dt.min(MAX_TWEEN_STEP_SEC), &mut self.scene);
        self.scene.set_time(tick.elapsed);
        let eye = orbit_eye(
            self.config.camera_distance,
            self.config.camera_height,
            CAMERA_ORBIT_RATE,
            tick.elapsed,
        );
        self.camera.look_at(eye, Vec3::ZERO);
        Some(tick)
    }

    /// Apply a new viewport and return the surface size the renderer should use.
    pub fn resize(&mut self, viewport: Viewport) -> SurfaceSize {
        self.config.set_viewport(viewport);
        self.camera.set_aspect(viewport.aspect());
        self.camera.update_projection_matrix();
        let size = viewport.physical_size();
        log::debug!(
            "[stage] resize {}x{} -> {}x{}",
            viewport.width,
            viewport.height,
            size.width,
            size.height
        );
        size
    }

    pub fn start(&mut self) {
        if !self.clock.is_running() {
            log::info!("[stage] resumed at t={:.2}", self.clock.elapsed());
        }
        self.clock.start();
    }

    pub fn stop(&mut self) {
        if self.clock.is_running() {
            log::info!("[stage] stopped at t={:.2}", self.clock.elapsed());
        }
        self.clock.stop();
    }

    pub fn toggle(&mut self) {
        if self.clock.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }
}
