//! Runtime configuration with TOML preset support.
//!
//! Camera parameters and per-environment scene presets serialize to and
//! from TOML. All sub-structs use `#[serde(default)]` so partial files
//! (e.g. only overriding `[camera]`) work correctly.

mod camera;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use scene::ScenePreset;
use serde::{Deserialize, Serialize};

use crate::error::PathviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and zoom parameters.
    pub camera: CameraOptions,
    /// Scene launch configuration.
    pub scene: ScenePreset,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failures reading the file, or
    /// [`PathviewError::OptionsParse`] for malformed TOML.
    pub fn load(path: &Path) -> Result<Self, PathviewError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PathviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`PathviewError::OptionsParse`] for serialization failures,
    /// I/O failures creating directories or writing the file.
    pub fn save(&self, path: &Path) -> Result<(), PathviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
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
    fn test_default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r#"
[scene]
task_file = "asteroids/task.ini"
initial_zoom = 650.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.scene.task_file, "asteroids/task.ini");
        // Everything else should be default
        assert_eq!(opts.scene.path_file, "path.txt");
        assert_eq!(opts.camera.fovy, 30.0);
        assert_eq!(opts.camera.zoom.max, 2000.0);
    }

    #[test]
    fn test_preset_rotation_is_normalized() {
        let preset = ScenePreset {
            initial_rotation: [2.0, 0.0, 0.0, 0.0],
            ..ScenePreset::default()
        };
        let q = preset.rotation();
        assert!((q.length() - 1.0).abs() < 1e-6);
        assert_eq!(q.x, 1.0);
    }

    #[test]
    fn test_zoom_limits_override() {
        let toml_str = r"
[camera.zoom]
min = 500.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom.min, 500.0);
        assert_eq!(opts.camera.zoom.max, 2000.0);
        assert_eq!(opts.camera.zoom.step, 25.0);
    }
}
