use glam::{Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::error::MannequinError;

/// Half-line used for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (expected to be unit length).
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Convert normalized device coordinates to a world-space ray starting
    /// at the camera eye.
    ///
    /// The near-plane point under `ndc` (depth 0 in wgpu's [0, 1] range) is
    /// unprojected through the inverse view-projection matrix; the ray
    /// points from the eye through it.
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Result<Self, MannequinError> {
        let view_proj = camera.invertible_matrix()?;
        let inv_view_proj = view_proj.inverse();

        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        if !world_near.w.is_finite() || world_near.w.abs() <= f32::EPSILON {
            return Err(MannequinError::InvalidCameraState(
                "near-plane point unprojects to infinity".to_owned(),
            ));
        }
        // Perspective divide
        let near_point = world_near.truncate() / world_near.w;

        let direction = near_point - camera.eye;
        if !direction.is_finite() || direction.length_squared() <= f32::EPSILON * f32::EPSILON {
            return Err(MannequinError::InvalidCameraState(format!(
                "cannot derive a ray direction from eye {} through {near_point}",
                camera.eye
            )));
        }

        Ok(Self::new(camera.eye, direction.normalize()))
    }
}
