use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer handling parameters.
pub struct InputOptions {
    /// Cursor travel in pixels after which a press becomes a drag instead
    /// of a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 32.0), extend("step" = 1.0))]
    pub drag_threshold: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            drag_threshold: 4.0,
        }
    }
}
