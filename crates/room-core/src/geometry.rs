//! Shapes, materials and ray intersection for the static room.
//!
//! Every piece of furniture is built from axis-aligned cuboids plus a flat
//! ring marker, so picking only needs a slab test and a ray/annulus test.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

const PARALLEL_EPS: f32 = 1e-8;

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Slab test. Returns the distance to the entry point, or the exit point
    /// when the origin is inside the box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < PARALLEL_EPS {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }
        if t_far < 0.0 {
            return None;
        }
        Some(if t_near >= 0.0 { t_near } else { t_far })
    }
}

/// Flat ring lying in a horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub center: Vec3,
    pub inner: f32,
    pub outer: f32,
}

impl Annulus {
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let dy = ray.direction.y;
        if dy.abs() < PARALLEL_EPS {
            return None;
        }
        let t = (self.center.y - ray.origin.y) / dy;
        if t < 0.0 {
            return None;
        }
        let p = ray.point_at(t);
        let r = Vec2::new(p.x - self.center.x, p.z - self.center.z).length();
        (r >= self.inner && r <= self.outer).then_some(t)
    }
}

/// A pickable world-space surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Box(Aabb),
    Ring(Annulus),
}

impl Surface {
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        match self {
            Surface::Box(b) => b.intersect_ray(ray),
            Surface::Ring(r) => r.intersect_ray(ray),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { center: Vec3, size: Vec3 },
    /// One-sided rectangle spanned by two half-extent vectors. It faces
    /// `half_u × half_v`.
    Quad {
        center: Vec3,
        half_u: Vec3,
        half_v: Vec3,
    },
    Ring {
        center: Vec3,
        inner: f32,
        outer: f32,
        segments: u32,
    },
}

impl Shape {
    pub fn translated(&self, offset: Vec3) -> Self {
        match *self {
            Shape::Cuboid { center, size } => Shape::Cuboid {
                center: center + offset,
                size,
            },
            Shape::Quad {
                center,
                half_u,
                half_v,
            } => Shape::Quad {
                center: center + offset,
                half_u,
                half_v,
            },
            Shape::Ring {
                center,
                inner,
                outer,
                segments,
            } => Shape::Ring {
                center: center + offset,
                inner,
                outer,
                segments,
            },
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            Shape::Cuboid { center, .. }
            | Shape::Quad { center, .. }
            | Shape::Ring { center, .. } => center,
        }
    }

    pub fn surface(&self) -> Surface {
        match *self {
            Shape::Cuboid { center, size } => Surface::Box(Aabb::from_center_size(center, size)),
            Shape::Quad {
                center,
                half_u,
                half_v,
            } => Surface::Box(Aabb::from_center_size(center, (half_u.abs() + half_v.abs()) * 2.0)),
            Shape::Ring {
                center,
                inner,
                outer,
                ..
            } => Surface::Ring(Annulus {
                center,
                inner,
                outer,
            }),
        }
    }
}

/// Surface appearance. Colours are linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    /// Ignores scene lighting (ring markers).
    pub unlit: bool,
}

impl Material {
    pub fn standard(hex: u32) -> Self {
        Self {
            color: hex_to_linear(hex),
            opacity: 1.0,
            emissive: [0.0; 3],
            unlit: false,
        }
    }

    pub fn basic(hex: u32) -> Self {
        Self {
            unlit: true,
            ..Self::standard(hex)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_emissive(mut self, hex: u32) -> Self {
        self.emissive = hex_to_linear(hex);
        self
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub material: Material,
}

impl Part {
    pub fn quad(center: Vec3, half_u: Vec3, half_v: Vec3, material: Material) -> Self {
        Self {
            shape: Shape::Quad {
                center,
                half_u,
                half_v,
            },
            material,
        }
    }

    pub fn cuboid(center: Vec3, size: Vec3, material: Material) -> Self {
        Self {
            shape: Shape::Cuboid { center, size },
            material,
        }
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            shape: self.shape.translated(offset),
            material: self.material,
        }
    }
}

/// A furniture model in local coordinates (y = 0 on the floor).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub parts: SmallVec<[Part; 8]>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }
}

/// Convert a `0xRRGGBB` sRGB colour to linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
