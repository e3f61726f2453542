//! Camera description, viewport and responsive framing.
//!
//! These types avoid platform APIs; the web frontend feeds them the container
//! size and reads back matrices, rays and projected label positions.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, COMPACT_BREAKPOINT_PX, COMPACT_EYE, LOOK_AT,
    WIDE_EYE,
};
use crate::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Narrow screens: camera further out and higher.
    Compact,
    Wide,
}

/// Responsive camera placement rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingRule {
    /// Widths at or below this use the compact framing.
    pub breakpoint_px: f32,
    pub compact_eye: Vec3,
    pub wide_eye: Vec3,
    pub look_at: Vec3,
}

impl Default for FramingRule {
    fn default() -> Self {
        Self {
            breakpoint_px: COMPACT_BREAKPOINT_PX,
            compact_eye: COMPACT_EYE,
            wide_eye: WIDE_EYE,
            look_at: LOOK_AT,
        }
    }
}

impl FramingRule {
    pub fn framing_for(&self, viewport: Viewport) -> Framing {
        if viewport.width <= self.breakpoint_px {
            Framing::Compact
        } else {
            Framing::Wide
        }
    }

    pub fn pose_for(&self, viewport: Viewport) -> CameraPose {
        let eye = match self.framing_for(viewport) {
            Framing::Compact => self.compact_eye,
            Framing::Wide => self.wide_eye,
        };
        CameraPose {
            eye,
            target: self.look_at,
        }
    }
}

/// Camera position and look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: WIDE_EYE,
            target: LOOK_AT,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            target: self.target,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.eye;
        self.target = pose.target;
    }

    /// World-space ray from the eye through an NDC point.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }

    /// Project a world point to NDC. `None` when it falls outside the clip
    /// volume or behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let inside = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
        inside.then_some(ndc)
    }
}

/// NDC to CSS pixels, origin at the viewport's top-left.
#[inline]
pub fn ndc_to_pixels(ndc: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    )
}
