//! Scene graph container.
//!
//! The scene exclusively owns every placed object. Animators refer to
//! objects through [`ObjectId`] and mutate their transforms in place.

use crate::constants::{GROUND_SIZE, GROUND_Y, OBJECT_WIDTH, REST_SCALE_Y};
use crate::geometry::PlaneGeometry;
use crate::layout::ring_placements;
use crate::object::{shaded_object, GroundPlane, ShadedObject, Transform};
use glam::Vec3;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// Exponential-squared fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

/// Handle to the objects created by one [`Scene::add_ring`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    ids: Range<usize>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Object ids in ring order (index 0 first).
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.clone().map(ObjectId)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<ShadedObject>,
    rings: Vec<Ring>,
    ground: Option<GroundPlane>,
    pub fog: Fog,
    pub clear_color: [f32; 3],
    time: f32,
}

impl Scene {
    pub fn new(clear_color: [f32; 3], fog_density: f32) -> Self {
        Self {
            objects: Vec::new(),
            rings: Vec::new(),
            ground: None,
            fog: Fog {
                color: clear_color,
                density: fog_density,
            },
            clear_color,
            time: 0.0,
        }
    }

    /// Create `count` objects evenly spaced on a ring of `radius`.
    ///
    /// Each object uses the fixed [`OBJECT_WIDTH`] for its own geometry and
    /// starts at its resting vertical scale. Rings accumulate.
    pub fn add_ring(&mut self, radius: f32, count: usize) -> Ring {
        let start = self.objects.len();
        for placement in ring_placements(radius, count) {
            let mut object = shaded_object(OBJECT_WIDTH);
            object.transform = Transform {
                position: placement.position,
                yaw: placement.yaw,
                scale: Vec3::new(1.0, REST_SCALE_Y, 1.0),
            };
            self.objects.push(object);
        }
        let ring = Ring {
            radius,
            ids: start..self.objects.len(),
        };
        log::debug!("[scene] ring r={radius} count={count}");
        self.rings.push(ring.clone());
        ring
    }

    pub fn add_ground(&mut self) {
        self.ground = Some(GroundPlane {
            geometry: PlaneGeometry { size: GROUND_SIZE },
            transform: Transform {
                position: Vec3::new(0.0, GROUND_Y, 0.0),
                ..Transform::default()
            },
        });
    }

    pub fn objects(&self) -> &[ShadedObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&ShadedObject> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ShadedObject> {
        self.objects.get_mut(id.0)
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ground(&self) -> Option<&GroundPlane> {
        self.ground.as_ref()
    }

    /// Shared `time` uniform read by every object's shader.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, elapsed_sec: f32) {
        self.time = elapsed_sec;
    }
}
