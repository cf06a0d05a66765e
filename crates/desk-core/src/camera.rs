//! Camera description and the orbit controller that moves it.
//!
//! These types avoid platform APIs; the web frontend feeds pointer deltas into
//! the orbit controller and hands the resulting camera to picking.

use crate::constants::*;
use crate::picking::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
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
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
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

    /// Update the aspect ratio from a viewport size; degenerate sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space ray from the eye through a normalized pointer coordinate
    /// (both axes in [-1, 1], origin at the viewport centre, Y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }
}

/// Damped spherical orbit around a fixed target.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    theta_delta: f32,
    phi_delta: f32,
    pending_scale: f32,
}

const MIN_POLAR: f32 = 1e-4;
const SETTLE_EPS: f32 = 1e-5;

impl OrbitController {
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta_delta: 0.0,
            phi_delta: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag; a full viewport height is one turn.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let turn = std::f32::consts::TAU / viewport_height;
        self.theta_delta -= dx * turn;
        self.phi_delta -= dy * turn;
    }

    /// Queue a dolly from a wheel delta: positive moves away from the target.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y > 0.0 {
            self.pending_scale /= ORBIT_ZOOM_STEP;
        } else if wheel_delta_y < 0.0 {
            self.pending_scale *= ORBIT_ZOOM_STEP;
        }
    }

    /// Advance one frame of damping. Returns true while the orbit is still moving.
    pub fn update(&mut self) -> bool {
        let before = self.eye();
        self.theta += self.theta_delta * self.damping;
        self.phi = (self.phi + self.phi_delta * self.damping).clamp(MIN_POLAR, self.max_polar);
        self.radius =
            (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.theta_delta *= 1.0 - self.damping;
        self.phi_delta *= 1.0 - self.damping;
        self.pending_scale = 1.0;
        self.eye().distance(before) > SETTLE_EPS
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.phi
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
