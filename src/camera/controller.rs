use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Pending rotation below this magnitude (radians) is dropped.
const ROTATION_EPSILON: f32 = 1e-5;

/// Orbital camera controller: rotation, pan and zoom around a focus point,
/// with optional damping on rotation.
#[derive(Debug, Clone)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    /// Rotation (radians about up, radians about right) not yet applied.
    pending_rotation: Vec2,

    /// Camera derived from the orbit state.
    pub camera: Camera,
    /// Uniform mirror of `camera` for hosts that draw the scene.
    pub uniform: CameraUniform,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    damping_factor: f32,
    min_distance: f32,
    max_distance: f32,
    home_distance: f32,
}

impl OrbitController {
    /// Controller orbiting the origin at `opts.distance`, looking down -Z.
    #[must_use]
    pub fn new(opts: &CameraOptions, aspect: f32) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = opts.distance;
        let camera = Camera {
            eye: focus_point + Vec3::new(0.0, 0.0, distance),
            target: focus_point,
            up: Vec3::Y,
            aspect,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            orientation: Quat::IDENTITY,
            distance,
            focus_point,
            pending_rotation: Vec2::ZERO,
            camera,
            uniform,
            rotate_speed: opts.rotate_speed,
            pan_speed: opts.pan_speed,
            zoom_speed: opts.zoom_speed,
            damping_factor: opts.damping_factor.clamp(0.0, 1.0),
            min_distance: opts.min_distance,
            max_distance: opts.max_distance.max(opts.min_distance),
            home_distance: distance,
        }
    }

    /// Current distance from eye to focus point.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Point the camera orbits around.
    #[must_use]
    pub const fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
        self.uniform.update_view_proj(&self.camera);
    }

    fn apply_rotation(&mut self, angles: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation = Quat::from_axis_angle(up, -angles.x);
        self.orientation = horizontal_rotation * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical_rotation = Quat::from_axis_angle(right, -angles.y);
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// viewports are ignored so the projection stays invertible.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to {width}x{height}");
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    ///
    /// Without damping the rotation is applied immediately; otherwise
    /// [`OrbitController::update`] applies it over successive frames.
    pub fn rotate(&mut self, delta: Vec2) {
        let angles = delta * self.rotate_speed;
        if self.damping_factor <= 0.0 {
            self.apply_rotation(angles);
        } else {
            self.pending_rotation += angles;
        }
    }

    /// Rotate by `yaw` and `pitch` radians right away, bypassing damping.
    pub fn orbit_by(&mut self, yaw: f32, pitch: f32) {
        self.apply_rotation(Vec2::new(yaw, pitch));
    }

    /// Apply one damping step of the pending rotation.
    ///
    /// Returns `true` if the camera moved.
    pub fn update(&mut self) -> bool {
        if self.pending_rotation == Vec2::ZERO {
            return false;
        }
        let step = self.pending_rotation * self.damping_factor;
        self.pending_rotation -= step;
        if self.pending_rotation.length() < ROTATION_EPSILON {
            self.pending_rotation = Vec2::ZERO;
        }
        self.apply_rotation(step);
        true
    }

    /// Translate the focus point in the view plane by a pointer drag of
    /// `delta` pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Move toward (positive `delta`) or away from the focus point.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Center on a bounding sphere and back off until it fits the view.
    pub fn fit_to_sphere(&mut self, center: Vec3, radius: f32) {
        self.focus_point = center;

        // Set distance to fit the bounding sphere in view
        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).sin();
        self.distance = fit_distance.clamp(self.min_distance, self.max_distance);

        self.update_camera_pos();
    }

    /// Return to the initial orbit: origin focus, front view, configured
    /// distance, no pending rotation.
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.focus_point = Vec3::ZERO;
        self.distance = self.home_distance;
        self.pending_rotation = Vec2::ZERO;
        self.update_camera_pos();
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn undamped() -> CameraOptions {
        CameraOptions {
            damping_factor: 0.0,
            ..CameraOptions::default()
        }
    }

    #[test]
    fn starts_in_front_of_origin() {
        let ctrl = OrbitController::new(&CameraOptions::default(), 1.5);
        assert_eq!(ctrl.camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(ctrl.camera.target, Vec3::ZERO);
        assert_eq!(ctrl.camera.aspect, 1.5);
        assert!(ctrl.camera.validate().is_ok());
    }

    #[test]
    fn undamped_rotation_applies_immediately() {
        let mut ctrl = OrbitController::new(&undamped(), 1.0);
        ctrl.rotate(Vec2::new(PI / 2.0 / ctrl.rotate_speed, 0.0));
        assert!(!ctrl.update());
        // Quarter turn about +Y moves the eye from +Z onto the X axis.
        assert!(ctrl.camera.eye.z.abs() < 1e-4);
        assert!((ctrl.camera.eye.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn damped_rotation_converges_to_target() {
        let mut damped = OrbitController::new(&CameraOptions::default(), 1.0);
        let mut direct = OrbitController::new(&undamped(), 1.0);
        let delta = Vec2::new(40.0, 0.0);
        damped.rotate(delta);
        direct.rotate(delta);

        let eye_before = damped.camera.eye;
        assert!(damped.update());
        assert_ne!(damped.camera.eye, eye_before);
        let mut steps = 0;
        while damped.update() {
            steps += 1;
            assert!(steps < 10_000, "damping never settled");
        }
        assert!((damped.camera.eye - direct.camera.eye).length() < 1e-2);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut ctrl = OrbitController::new(&undamped(), 1.0);
        for _ in 0..100 {
            ctrl.zoom(5.0);
        }
        assert_eq!(ctrl.distance(), CameraOptions::default().min_distance);
        for _ in 0..200 {
            ctrl.zoom(-5.0);
        }
        assert_eq!(ctrl.distance(), CameraOptions::default().max_distance);
    }

    #[test]
    fn pan_moves_focus_in_view_plane() {
        let mut ctrl = OrbitController::new(&undamped(), 1.0);
        ctrl.pan(Vec2::new(-100.0, 0.0));
        assert!(ctrl.focus_point().x > 0.0);
        assert_eq!(ctrl.focus_point().z, 0.0);
        assert_eq!(ctrl.camera.target, ctrl.focus_point());
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut ctrl = OrbitController::new(&undamped(), 1.0);
        ctrl.resize(0, 600);
        assert_eq!(ctrl.camera.aspect, 1.0);
        ctrl.resize(800, 400);
        assert_eq!(ctrl.camera.aspect, 2.0);
    }

    #[test]
    fn fit_and_reset() {
        let mut ctrl = OrbitController::new(&undamped(), 1.0);
        ctrl.fit_to_sphere(Vec3::new(0.0, -0.5, 0.0), 3.0);
        assert_eq!(ctrl.focus_point(), Vec3::new(0.0, -0.5, 0.0));
        assert!(ctrl.distance() > 3.0);
        ctrl.orbit_by(1.0, 0.3);
        ctrl.reset();
        assert_eq!(ctrl.camera.target, Vec3::ZERO);
        assert!((ctrl.camera.eye - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
    }
}
