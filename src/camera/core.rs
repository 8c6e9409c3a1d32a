use glam::{Mat4, Vec3, Vec4};

use crate::error::MannequinError;

/// Smallest |determinant| accepted for an invertible view-projection.
const MIN_DETERMINANT: f32 = 1e-12;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for Camera {
    /// Eye at (0, 0, 5) looking at the origin, 45° vertical FOV.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Check that the camera can produce a usable projection.
    ///
    /// Picking runs the same checks on every call.
    pub fn validate(&self) -> Result<(), MannequinError> {
        self.invertible_matrix().map(|_| ())
    }

    /// The view-projection matrix, or an error if the camera parameters are
    /// out of range or the matrix cannot be inverted.
    ///
    /// A negative aspect, an obtuse field of view or a near plane behind the
    /// eye still yield an invertible matrix, but one that mirrors or flips
    /// the view, so the parameters are checked before the determinant.
    pub(crate) fn invertible_matrix(&self) -> Result<Mat4, MannequinError> {
        let invalid = |msg: String| Err(MannequinError::InvalidCameraState(msg));

        if !(self.eye.is_finite()
            && self.target.is_finite()
            && self.up.is_finite())
        {
            return invalid("non-finite eye, target or up vector".to_owned());
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return invalid(format!("aspect ratio {} is not positive", self.aspect));
        }
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return invalid(format!("field of view {}° is outside (0, 180)", self.fovy));
        }
        if !(self.znear.is_finite() && self.znear > 0.0) {
            return invalid(format!("near plane {} is not positive", self.znear));
        }
        if !(self.zfar.is_finite() && self.zfar > self.znear) {
            return invalid(format!(
                "far plane {} is not beyond near plane {}",
                self.zfar, self.znear
            ));
        }
        let forward = self.forward();
        if forward == Vec3::ZERO {
            return invalid("eye and target coincide".to_owned());
        }
        if forward.cross(self.up).length_squared() <= f32::EPSILON {
            return invalid("up vector is parallel to the view direction".to_owned());
        }

        let view_proj = self.build_matrix();
        let det = view_proj.determinant();
        if !det.is_finite() || det.abs() < MIN_DETERMINANT {
            return invalid(format!(
                "view-projection matrix is not invertible (determinant {det})"
            ));
        }
        Ok(view_proj)
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// `x`/`y` are in [-1, 1] for points inside the view (+Y up), `z` is
    /// depth in [0, 1]. Points behind the eye produce meaningless values.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Vec3 {
        let clip = self.build_matrix() * Vec4::from((world, 1.0));
        clip.truncate() / clip.w
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_camera_error(result: Result<(), MannequinError>) -> bool {
        matches!(result, Err(MannequinError::InvalidCameraState(_)))
    }

    #[test]
    fn default_camera_is_valid() {
        assert!(Camera::default().validate().is_ok());
    }

    #[test]
    fn degenerate_cameras_are_rejected() {
        let base = Camera::default();
        assert!(is_camera_error(
            Camera {
                aspect: 0.0,
                ..base
            }
            .validate()
        ));
        assert!(is_camera_error(
            Camera {
                fovy: 0.0,
                ..base
            }
            .validate()
        ));
        assert!(is_camera_error(
            Camera {
                znear: 10.0,
                zfar: 1.0,
                ..base
            }
            .validate()
        ));
        assert!(is_camera_error(
            Camera {
                target: base.eye,
                ..base
            }
            .validate()
        ));
        assert!(is_camera_error(
            Camera {
                up: Vec3::Z,
                ..base
            }
            .validate()
        ));
        assert!(is_camera_error(
            Camera {
                eye: Vec3::new(f32::NAN, 0.0, 5.0),
                ..base
            }
            .validate()
        ));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = Camera {
            target: Vec3::new(1.0, 2.0, 0.0),
            aspect: 16.0 / 9.0,
            ..Camera::default()
        };
        let ndc = camera.project(camera.target);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn points_above_target_project_upward() {
        let camera = Camera::default();
        assert!(camera.project(Vec3::new(0.0, 1.0, 0.0)).y > 0.0);
        assert!(camera.project(Vec3::new(1.0, 0.0, 0.0)).x > 0.0);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = Camera {
            aspect: 2.0,
            ..Camera::default()
        };
        let mut uniform = CameraUniform::default();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.view_proj, camera.build_matrix().to_cols_array_2d());
    }
}
