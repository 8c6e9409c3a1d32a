//! Centralized view options with TOML preset support.
//!
//! Camera, lighting, tessellation and pointer settings are consolidated
//! here. Options serialize to/from TOML so a host can ship view presets.

mod camera;
mod geometry;
mod input;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use geometry::GeometryOptions;
pub use input::InputOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MannequinError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Mesh tessellation detail.
    pub geometry: GeometryOptions,
    /// Pointer handling parameters.
    #[schemars(skip)]
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MannequinError> {
        let content =
            std::fs::read_to_string(path).map_err(MannequinError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, MannequinError> {
        toml::from_str(content)
            .map_err(|e| MannequinError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MannequinError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MannequinError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MannequinError::Io)?;
        }
        std::fs::write(path, content).map_err(MannequinError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lighting]
ambient_intensity = 0.25
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.lighting.ambient_intensity, 0.25);
        // Everything else should be default
        assert_eq!(opts.lighting.directional_intensity, 0.8);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.geometry.segments, 32);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nfovy = \"wide\"\n")
            .unwrap_err();
        assert!(matches!(err, MannequinError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.camera.distance = 7.5;
        opts.save(&dir.path().join("presets/close.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("presets/default.toml"))
            .unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "skip").unwrap();

        let loaded =
            Options::load(&dir.path().join("presets/close.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            vec!["close".to_owned(), "default".to_owned()]
        );
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        assert!(Options::list_presets(Path::new("/nonexistent/presets"))
            .is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("geometry"));
        // Skipped sections should be absent
        assert!(!props.contains_key("input"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("damping_factor").is_some());
        assert!(camera.get("znear").is_none());
    }
}
