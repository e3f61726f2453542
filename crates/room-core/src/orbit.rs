//! Damped orbit controls around a fixed target (no panning).

use crate::camera::{Camera, CameraPose};
use crate::constants::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
    ORBIT_ZOOM_STEP,
};
use glam::{Vec2, Vec3};

const POLAR_EPS: f32 = 1e-6;
const MOVE_EPS: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around +Y, measured from +Z.
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            damping: ORBIT_DAMPING,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: 1.0,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            drag_from: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, px: Vec2) {
        self.drag_from = Some(px);
    }

    /// Rotate by the pointer delta since the last call. A full viewport
    /// height of travel is one full turn.
    pub fn drag_to(&mut self, px: Vec2, viewport_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        let h = viewport_height.max(1.0);
        let d = px - from;
        let turn = std::f32::consts::TAU * self.rotate_speed / h;
        self.delta_theta -= d.x * turn;
        self.delta_phi -= d.y * turn;
        self.drag_from = Some(px);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Wheel input; positive `delta_y` moves away from the target.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        }
    }

    /// Snap to `pose`, discarding any pending motion.
    pub fn reset(&mut self, pose: CameraPose, camera: &mut Camera) {
        self.target = pose.target;
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.drag_from = None;
        camera.set_pose(pose);
        self.update(camera);
    }

    /// Apply one damped step to `camera`. Returns `true` if the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut s = Spherical::from_offset(camera.eye - self.target);
        s.theta += self.delta_theta * self.damping;
        s.phi += self.delta_phi * self.damping;
        s.phi = s
            .phi
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
        s.radius = (s.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let eye = self.target + s.to_offset();
        // Sub-threshold steps are dropped so a settled camera keeps its exact pose.
        let moved = eye.distance_squared(camera.eye) > MOVE_EPS * MOVE_EPS;
        if moved {
            camera.eye = eye;
        }
        camera.target = self.target;

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.scale = 1.0;
        moved
    }
}
