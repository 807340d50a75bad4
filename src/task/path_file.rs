//! Path-file parser.
//!
//! One pose per line: seven whitespace-separated floats
//! `x y z qw qx qy qz` (scalar-first quaternion, as the planner writes
//! it). Positions are translated into the scene's recentered frame;
//! orientations are normalized so the unit-quaternion invariant holds
//! from construction onward. Blank lines are skipped.

use glam::{Quat, Vec3};

use crate::error::PathviewError;
use crate::playback::{Pose, PoseSequence};

/// Parse a path file into a fresh [`PoseSequence`], translating every
/// position by `-center`.
///
/// # Errors
///
/// [`PathviewError::PathParse`] for lines without exactly seven finite
/// floats, [`PathviewError::EmptyPath`] when no pose lines remain.
pub fn parse_path(
    text: &str,
    center: Vec3,
) -> Result<PoseSequence, PathviewError> {
    let mut poses = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields = parse_fields(line, lineno)?;

        poses.push(Pose {
            position: Vec3::new(fields[0], fields[1], fields[2]) - center,
            // File order is w x y z; memory order is x y z w
            orientation: Quat::from_xyzw(
                fields[4], fields[5], fields[6], fields[3],
            )
            .normalize(),
        });
    }

    PoseSequence::new(poses)
}

fn parse_fields(
    line: &str,
    lineno: usize,
) -> Result<[f32; 7], PathviewError> {
    let mut fields = [0.0_f32; 7];
    let mut count = 0;

    for item in line.split_whitespace() {
        if count == 7 {
            return Err(PathviewError::PathParse(format!(
                "line {}: expected 7 fields, found more",
                lineno + 1
            )));
        }
        let value: f32 = item.parse().map_err(|_| {
            PathviewError::PathParse(format!(
                "line {}: bad float '{item}'",
                lineno + 1
            ))
        })?;
        if !value.is_finite() {
            return Err(PathviewError::PathParse(format!(
                "line {}: non-finite field '{item}'",
                lineno + 1
            )));
        }
        fields[count] = value;
        count += 1;
    }

    if count < 7 {
        return Err(PathviewError::PathParse(format!(
            "line {}: expected 7 fields, found {count}",
            lineno + 1
        )));
    }

    Ok(fields)
}
