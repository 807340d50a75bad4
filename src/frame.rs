//! Per-frame transform composition.
//!
//! Combines the trackball orientation, camera distance, and current path
//! pose into the plain transform values handed to the external renderer.
//! Everything here is a value snapshot: the renderer copies transforms
//! out, it never aliases into the pose storage.

use glam::{Quat, Vec3};

use crate::playback::Pose;

/// A rigid transform: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Unit orientation quaternion.
    pub orientation: Quat,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Camera placement for this frame.
    pub camera: Transform,
    /// Animated robot placement for this frame.
    pub robot: Transform,
    /// Anchor transform shared by all static obstacle models.
    pub obstacles: Transform,
}

/// Place the camera on a sphere of radius `distance` around the origin,
/// facing the origin, oriented by the trackball rotation: the eye sits at
/// `rotation * (0, 0, distance)` and shares the rotation as its
/// orientation.
#[must_use]
pub fn camera_transform(rotation: Quat, distance: f32) -> Transform {
    Transform {
        position: rotation * Vec3::new(0.0, 0.0, distance),
        orientation: rotation,
    }
}

/// The animated robot takes its pose verbatim: an identity passthrough,
/// with no extra transform layered on top.
#[must_use]
pub fn robot_transform(pose: Pose) -> Transform {
    Transform {
        position: pose.position,
        orientation: pose.orientation,
    }
}

/// Obstacles are static: all of them sit at the scene's recentering
/// anchor with no rotation.
#[must_use]
pub fn obstacle_transform(anchor: Vec3) -> Transform {
    Transform {
        position: anchor,
        orientation: Quat::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_identity_rotation_places_camera_on_z() {
        let t = camera_transform(Quat::IDENTITY, 650.0);
        assert!((t.position - Vec3::new(0.0, 0.0, 650.0)).length() < EPS);
        assert_eq!(t.orientation, Quat::IDENTITY);
    }

    #[test]
    fn test_camera_orbits_with_rotation() {
        // Quarter turn about Y takes +Z to +X
        let rot = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let t = camera_transform(rot, 100.0);
        assert!((t.position - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3);
        assert_eq!(t.orientation, rot);
        // Distance is preserved by rotation
        assert!((t.position.length() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_robot_transform_is_passthrough() {
        let pose = Pose {
            position: Vec3::new(1.0, -2.0, 3.0),
            orientation: Quat::from_rotation_x(0.5),
        };
        let t = robot_transform(pose);
        assert_eq!(t.position, pose.position);
        assert_eq!(t.orientation, pose.orientation);
    }

    #[test]
    fn test_obstacle_anchor_has_identity_orientation() {
        let t = obstacle_transform(Vec3::new(-5.0, -6.0, -7.0));
        assert_eq!(t.position, Vec3::new(-5.0, -6.0, -7.0));
        assert_eq!(t.orientation, Quat::IDENTITY);
    }
}
