//! Camera state for 3D scene viewing.
//!
//! Provides the virtual-trackball rotation, the pointer-to-sphere
//! projection it consumes, and the wheel-driven camera distance.

/// Pointer-to-unit-sphere projection.
pub mod projection;
/// Virtual trackball (arcball) rotation state machine.
pub mod trackball;
/// Wheel-driven camera distance with clamped limits.
pub mod zoom;

pub use projection::project_to_sphere;
pub use trackball::Trackball;
pub use zoom::{ZoomControl, ZoomLimits};
