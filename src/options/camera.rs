use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial distance from the eye to the orbit focus point.
    #[schemars(title = "Distance", range(min = 1.0, max = 20.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Rotation sensitivity in radians per dragged pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity in world units per dragged pixel.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Fraction of the pending rotation applied per update. `0.0` applies
    /// rotation immediately.
    #[schemars(title = "Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest allowed orbit distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 5.0,
            rotate_speed: 0.01,
            pan_speed: 0.01,
            zoom_speed: 0.1,
            damping_factor: 0.05,
            min_distance: 1.0,
            max_distance: 100.0,
        }
    }
}
