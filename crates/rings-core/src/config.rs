//! Runtime configuration records derived from the tuning constants.
//!
//! `SceneConfig` is created once at startup and mutated only by resizes.
//! `CameraConfig` is a snapshot used to build the [`Camera`](crate::Camera).

use crate::constants::*;
use crate::error::SceneError;
use glam::Vec3;

/// Host viewport in CSS (logical) pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

/// Backing-store size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::DegenerateViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(SceneError::InvalidPixelRatio(pixel_ratio));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn physical_size(&self) -> SurfaceSize {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).round() as u32).max(1);
        SurfaceSize {
            width: scale(self.width),
            height: scale(self.height),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub clear_color: [f32; 3],
    pub fog_density: f32,
    pub camera_distance: f32,
    pub camera_height: f32,
}

impl SceneConfig {
    pub fn new(viewport: Viewport) -> Self {
        let camera_distance = outer_ring_radius() * CAMERA_DISTANCE_FACTOR;
        Self {
            viewport,
            clear_color: CLEAR_COLOR,
            fog_density: FOG_DENSITY,
            camera_distance,
            camera_height: camera_distance * CAMERA_HEIGHT_FACTOR,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraConfig {
    pub fn from_scene(config: &SceneConfig) -> Self {
        Self {
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            aspect: config.viewport.aspect(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::new(0.0, config.camera_height, config.camera_distance),
            target: Vec3::ZERO,
        }
    }
}
