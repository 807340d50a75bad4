use glam::Quat;
use serde::{Deserialize, Serialize};

/// Launch configuration for one environment: where its files live and
/// how the view starts out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenePreset {
    /// Task file path, relative to the preset's base directory.
    pub task_file: String,
    /// Path file path, relative to the preset's base directory.
    pub path_file: String,
    /// Directory holding the scene's model files.
    pub model_dir: String,
    /// Camera distance at scene entry.
    pub initial_zoom: f32,
    /// View orientation at scene entry, as `[x, y, z, w]`.
    pub initial_rotation: [f32; 4],
}

impl Default for ScenePreset {
    fn default() -> Self {
        Self {
            task_file: "task.ini".to_owned(),
            path_file: "path.txt".to_owned(),
            model_dir: String::new(),
            initial_zoom: 650.0,
            // Quarter turn about X: look down on a Z-up scene
            initial_rotation: [0.7071, 0.0, 0.0, 0.7071],
        }
    }
}

impl ScenePreset {
    /// Initial view orientation as a (normalized) quaternion.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_array(self.initial_rotation).normalize()
    }
}
