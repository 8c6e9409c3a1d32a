use glam::Vec3;
use serde::Serialize;

use crate::options::LightingOptions;

/// Uniform light applied to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientLight {
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Scalar intensity.
    pub intensity: f32,
}

/// Light arriving from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalLight {
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Scalar intensity.
    pub intensity: f32,
    /// Position of the light; only its direction from the origin matters.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector the light travels along (from `position` toward the
    /// origin). Zero when the light sits on the origin.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

impl From<&LightingOptions> for AmbientLight {
    fn from(opts: &LightingOptions) -> Self {
        Self {
            color: opts.ambient_color,
            intensity: opts.ambient_intensity,
        }
    }
}

impl From<&LightingOptions> for DirectionalLight {
    fn from(opts: &LightingOptions) -> Self {
        Self {
            color: opts.directional_color,
            intensity: opts.directional_intensity,
            position: Vec3::from_array(opts.directional_position),
        }
    }
}
