//! Scene asset loading: task descriptions, path files, and models.
//!
//! Every parser here is a pure function from text to a freshly built
//! value. No accumulator state survives between calls, so repeated or
//! interleaved loads can never contaminate each other.

/// OBJ-subset model parser.
pub mod model;
/// Path-file parser (one pose per line).
pub mod path_file;
/// Task-file parser (robot, obstacles, scene bounds).
pub mod task_file;

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;

use crate::error::PathviewError;
use crate::playback::PoseSequence;

pub use model::MeshData;
pub use task_file::{Bounds, Task};

/// Load a task file and its companion path file from disk.
///
/// The path file's positions are recentered on the task's bounding-box
/// midpoint, so the returned sequence lives in the same frame as the
/// task's obstacle anchor. This is the single completion point of scene
/// loading: both files have been read and parsed, or an error names
/// which one failed.
///
/// # Errors
///
/// I/O failures from either file, [`PathviewError::TaskParse`] /
/// [`PathviewError::PathParse`] for malformed content, and
/// [`PathviewError::EmptyPath`] for a path file with no poses.
pub fn load_scene(
    task_path: &Path,
    path_path: &Path,
) -> Result<(Task, Arc<PoseSequence>), PathviewError> {
    let task_text = std::fs::read_to_string(task_path)?;
    let task = task_file::parse_task(&task_text)?;

    let path_text = std::fs::read_to_string(path_path)?;
    let poses = path_file::parse_path(&path_text, task.bounds.center())?;

    log::debug!(
        "loaded scene: robot '{}', {} obstacle(s), {} pose(s)",
        task.robot_filename,
        task.obstacle_filenames.len(),
        poses.len()
    );

    Ok((task, Arc::new(poses)))
}

/// Anchor position for obstacle models: the negated bounding-box
/// midpoint, which recenters the scene on the origin.
#[must_use]
pub fn obstacle_anchor(bounds: &Bounds) -> Vec3 {
    -bounds.center()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_anchor_negates_center() {
        let bounds = Bounds {
            min: Vec3::new(0.0, -10.0, 20.0),
            max: Vec3::new(10.0, 10.0, 40.0),
        };
        assert_eq!(obstacle_anchor(&bounds), Vec3::new(-5.0, 0.0, -30.0));
    }
}
