//! Even placement of objects around a horizontal circle.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPlacement {
    /// Index within the ring.
    pub index: usize,
    pub radius: f32,
    pub angle: f32,
    pub position: Vec3,
    /// Rotation about +Y so the object faces along the ring.
    pub yaw: f32,
}

/// Placements for `count` objects on a ring of `radius`, starting at +X.
///
/// A zero count yields an empty iterator.
pub fn ring_placements(radius: f32, count: usize) -> impl Iterator<Item = ObjectPlacement> {
    (0..count).map(move |index| {
        let angle = TAU * index as f32 / count as f32;
        let position = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
        ObjectPlacement {
            index,
            radius,
            angle,
            position,
            yaw: facing_yaw(position),
        }
    })
}

/// `π/2 − atan2(z, x)` for a point on the ring.
#[inline]
pub fn facing_yaw(position: Vec3) -> f32 {
    FRAC_PI_2 - position.z.atan2(position.x)
}
