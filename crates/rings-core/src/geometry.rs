//! CPU-side mesh generation for the sphere objects and the ground plane.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// UV sphere centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereGeometry {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    pub fn build(&self) -> MeshData {
        let cols = self.width_segments + 1;
        let rows = self.height_segments + 1;
        let mut vertices = Vec::with_capacity((cols * rows) as usize);
        for iy in 0..rows {
            let v = iy as f32 / self.height_segments as f32;
            let theta = v * PI;
            for ix in 0..cols {
                let u = ix as f32 / self.width_segments as f32;
                let phi = u * TAU;
                let normal = [
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(Vertex {
                    position: [
                        normal[0] * self.radius,
                        normal[1] * self.radius,
                        normal[2] * self.radius,
                    ],
                    normal,
                    uv: [u, 1.0 - v],
                });
            }
        }

        let mut indices = Vec::with_capacity((self.width_segments * self.height_segments * 6) as usize);
        for iy in 0..self.height_segments {
            for ix in 0..self.width_segments {
                let a = iy * cols + ix + 1;
                let b = iy * cols + ix;
                let c = (iy + 1) * cols + ix;
                let d = (iy + 1) * cols + ix + 1;
                // poles collapse to a single triangle per segment
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != self.height_segments - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }
        MeshData { vertices, indices }
    }
}

/// Flat square in the XZ plane facing +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub size: f32,
}

impl PlaneGeometry {
    pub fn build(&self) -> MeshData {
        let h = self.size * 0.5;
        let corner = |x: f32, z: f32, u: f32, v: f32| Vertex {
            position: [x, 0.0, z],
            normal: [0.0, 1.0, 0.0],
            uv: [u, v],
        };
        MeshData {
            vertices: vec![
                corner(-h, -h, 0.0, 0.0),
                corner(h, -h, 1.0, 0.0),
                corner(h, h, 1.0, 1.0),
                corner(-h, h, 0.0, 1.0),
            ],
            // counter-clockwise seen from above
            indices: vec![0, 2, 1, 0, 3, 2],
        }
    }
}
