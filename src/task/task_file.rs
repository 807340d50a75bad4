//! Task-file parser.
//!
//! Task files are line oriented: `key = value...` records with `;`
//! comment lines and blank lines skipped. Recognized keys are the robot
//! model filename, the obstacle model filenames, and the six scene
//! bounds (`minX` through `maxZ`). All six bounds are required: the scene
//! recentering math divides by nothing but would happily propagate NaN
//! from a missing bound, so absence is a parse error here.

use glam::Vec3;

use crate::error::PathviewError;

/// Axis-aligned scene bounds from the task file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Midpoint of the bounding box; the scene is recentered on it.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }
}

/// A parsed task: which models to show and where the scene sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Robot model filename, relative to the task's model directory.
    pub robot_filename: String,
    /// Obstacle model filenames, relative to the model directory.
    pub obstacle_filenames: Vec<String>,
    /// Scene bounds used for recentering.
    pub bounds: Bounds,
}

/// Parse a task file into a fresh [`Task`].
///
/// # Errors
///
/// [`PathviewError::TaskParse`] when the robot filename is missing, a
/// bound value fails to parse, or any of the six bounds is absent.
pub fn parse_task(text: &str) -> Result<Task, PathviewError> {
    const BOUND_KEYS: [&str; 6] =
        ["minX", "minY", "minZ", "maxX", "maxY", "maxZ"];

    let mut robot_filename: Option<String> = None;
    let mut obstacle_filenames: Vec<String> = Vec::new();
    let mut bounds = [None::<f32>; 6];

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let items: Vec<&str> = line.split_whitespace().collect();
        match items.as_slice() {
            ["robotFilename", _, value] => {
                robot_filename = Some((*value).to_owned());
            }
            ["obstacleFilenames", _, values @ ..] => {
                obstacle_filenames =
                    values.iter().map(|s| (*s).to_owned()).collect();
            }
            [key, _, value] => {
                if let Some(slot) =
                    BOUND_KEYS.iter().position(|k| k == key)
                {
                    bounds[slot] = Some(parse_bound(*value, lineno)?);
                }
                // Unknown keys are skipped, like the original format
            }
            _ => {}
        }
    }

    let robot_filename = robot_filename.ok_or_else(|| {
        PathviewError::TaskParse("missing robotFilename".to_owned())
    })?;

    let mut resolved = [0.0_f32; 6];
    for (slot, value) in bounds.iter().enumerate() {
        resolved[slot] = value.ok_or_else(|| {
            PathviewError::TaskParse(format!(
                "missing bound '{}'",
                BOUND_KEYS[slot]
            ))
        })?;
    }

    Ok(Task {
        robot_filename,
        obstacle_filenames,
        bounds: Bounds {
            min: Vec3::new(resolved[0], resolved[1], resolved[2]),
            max: Vec3::new(resolved[3], resolved[4], resolved[5]),
        },
    })
}

fn parse_bound(value: &str, lineno: usize) -> Result<f32, PathviewError> {
    let parsed: f32 = value.parse().map_err(|_| {
        PathviewError::TaskParse(format!(
            "line {}: bad bound value '{value}'",
            lineno + 1
        ))
    })?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(PathviewError::TaskParse(format!(
            "line {}: non-finite bound value '{value}'",
            lineno + 1
        )))
    }
}
