//! Perspective camera and the orbit followed by the animation loop.
//!
//! These types avoid platform-specific APIs; the renderer consumes them to
//! build the view-projection matrix each frame.

use crate::config::CameraConfig;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
///
/// The projection matrix is cached and only recomputed by
/// [`Camera::update_projection_matrix`], mirroring how the resize handler
/// changes `aspect` first and then refreshes the projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            eye: config.position,
            target: config.target,
            up: Vec3::Y,
            aspect: config.aspect,
            fovy_radians: config.fov_y_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    /// Move the eye and keep looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    /// Clip-space projection matrix as of the last `update_projection_matrix`.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

/// Eye position on the horizontal orbit after `elapsed_sec` seconds.
#[inline]
pub fn orbit_eye(distance: f32, height: f32, rate: f32, elapsed_sec: f32) -> Vec3 {
    let angle = rate * elapsed_sec;
    Vec3::new(distance * angle.sin(), height, distance * angle.cos())
}
