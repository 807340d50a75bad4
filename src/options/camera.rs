use serde::{Deserialize, Serialize};

use crate::camera::ZoomLimits;

/// Camera projection and zoom parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Camera distance range and wheel step.
    pub zoom: ZoomLimits,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 0.1,
            zfar: 10000.0,
            zoom: ZoomLimits::default(),
        }
    }
}
