//! Tessellation of parts into GPU-ready triangle lists.
//!
//! Front faces wind counter-clockwise when viewed from outside.

use crate::geometry::{Part, Shape};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub emissive: [f32; 3],
    /// 1.0 skips lighting.
    pub unlit: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a Part>) -> Self {
        let mut mesh = Self::new();
        for part in parts {
            mesh.push_part(part);
        }
        mesh
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn push_part(&mut self, part: &Part) {
        let m = &part.material;
        let proto = Vertex {
            position: [0.0; 3],
            normal: [0.0; 3],
            color: [m.color[0], m.color[1], m.color[2], m.opacity],
            emissive: m.emissive,
            unlit: if m.unlit { 1.0 } else { 0.0 },
        };
        match part.shape {
            Shape::Cuboid { center, size } => {
                let h = size.abs() * 0.5;
                // (outward normal, half_u, half_v) with half_u × half_v along the normal
                let faces = [
                    (Vec3::X, Vec3::new(0.0, 0.0, -h.z), Vec3::new(0.0, h.y, 0.0)),
                    (Vec3::NEG_X, Vec3::new(0.0, 0.0, h.z), Vec3::new(0.0, h.y, 0.0)),
                    (Vec3::Y, Vec3::new(h.x, 0.0, 0.0), Vec3::new(0.0, 0.0, -h.z)),
                    (Vec3::NEG_Y, Vec3::new(h.x, 0.0, 0.0), Vec3::new(0.0, 0.0, h.z)),
                    (Vec3::Z, Vec3::new(h.x, 0.0, 0.0), Vec3::new(0.0, h.y, 0.0)),
                    (Vec3::NEG_Z, Vec3::new(-h.x, 0.0, 0.0), Vec3::new(0.0, h.y, 0.0)),
                ];
                for (n, u, v) in faces {
                    self.push_quad(center + n * h, u, v, proto);
                }
            }
            Shape::Quad {
                center,
                half_u,
                half_v,
            } => self.push_quad(center, half_u, half_v, proto),
            Shape::Ring {
                center,
                inner,
                outer,
                segments,
            } => self.push_ring(center, inner, outer, segments.max(3), proto),
        }
    }

    fn push_quad(&mut self, center: Vec3, half_u: Vec3, half_v: Vec3, proto: Vertex) {
        let normal = half_u.cross(half_v).normalize_or_zero().to_array();
        let base = self.vertices.len() as u32;
        for corner in [
            center - half_u - half_v,
            center + half_u - half_v,
            center + half_u + half_v,
            center - half_u + half_v,
        ] {
            self.vertices.push(Vertex {
                position: corner.to_array(),
                normal,
                ..proto
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Flat annulus facing +Y.
    fn push_ring(&mut self, center: Vec3, inner: f32, outer: f32, segments: u32, proto: Vertex) {
        let base = self.vertices.len() as u32;
        for i in 0..=segments {
            let a = std::f32::consts::TAU * i as f32 / segments as f32;
            let dir = Vec3::new(a.cos(), 0.0, a.sin());
            for r in [inner, outer] {
                self.vertices.push(Vertex {
                    position: (center + dir * r).to_array(),
                    normal: [0.0, 1.0, 0.0],
                    ..proto
                });
            }
        }
        for i in 0..segments {
            let in0 = base + i * 2;
            let out0 = in0 + 1;
            let in1 = in0 + 2;
            let out1 = in0 + 3;
            self.indices
                .extend_from_slice(&[in0, out1, out0, in0, in1, out1]);
        }
    }
}

/// Order translucent parts far-to-near from `eye` for blending.
pub fn sort_back_to_front(parts: &mut [Part], eye: Vec3) {
    parts.sort_by(|a, b| {
        let da = a.shape.center().distance_squared(eye);
        let db = b.shape.center().distance_squared(eye);
        db.total_cmp(&da)
    });
}
