use crate::constants::OBJECT_SEGMENTS;
use crate::geometry::{PlaneGeometry, SphereGeometry};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Position, rotation about the vertical axis, and non-uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::from_rotation_y(self.yaw), self.position)
    }
}

/// Custom-shaded material. The shared `time` uniform lives on the scene;
/// `resolution` is per material and fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderMaterial {
    pub resolution: Vec2,
    pub double_sided: bool,
}

#[derive(Clone, Debug)]
pub struct ShadedObject {
    pub geometry: SphereGeometry,
    pub material: ShaderMaterial,
    pub transform: Transform,
}

/// Build one sphere object of the given radius.
///
/// The resolution uniform is seeded with the object's own size, not the
/// viewport.
pub fn shaded_object(radius: f32) -> ShadedObject {
    ShadedObject {
        geometry: SphereGeometry::new(radius, OBJECT_SEGMENTS, OBJECT_SEGMENTS),
        material: ShaderMaterial {
            resolution: Vec2::new(radius, radius),
            double_sided: true,
        },
        transform: Transform::default(),
    }
}

#[derive(Clone, Debug)]
pub struct GroundPlane {
    pub geometry: PlaneGeometry,
    pub transform: Transform,
}
