use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Ambient and directional light parameters applied to the scene.
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_intensity: f32,
    /// Ambient light color (linear RGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Directional light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub directional_intensity: f32,
    /// Directional light color (linear RGB).
    #[schemars(skip)]
    pub directional_color: [f32; 3],
    /// Directional light position; the light shines toward the origin.
    #[schemars(skip)]
    pub directional_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            ambient_color: [1.0, 1.0, 1.0],
            directional_intensity: 0.8,
            directional_color: [1.0, 1.0, 1.0],
            directional_position: [1.0, 1.0, 1.0],
        }
    }
}
