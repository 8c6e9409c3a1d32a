use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Tessellation detail for the primitive meshes.
pub struct GeometryOptions {
    /// Radial segments for spheres and cylinders. Values below 3 are
    /// clamped when meshes are generated.
    #[schemars(title = "Segments", range(min = 3, max = 128), extend("step" = 1))]
    pub segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self { segments: 32 }
    }
}
