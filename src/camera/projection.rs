//! Maps a viewport pixel coordinate onto the trackball's unit sphere.
//!
//! Inside the sphere's silhouette the mapping is the exact sphere
//! intersection; outside it switches to a hyperbolic sheet so the point
//! stays well defined for arbitrarily large pointer excursions. The two
//! branches meet at planar radius² = 0.5, so a drag crossing the
//! silhouette never jumps.

use glam::Vec3;

/// Planar radius² at which the sphere branch hands over to the
/// hyperbolic sheet.
const SHEET_THRESHOLD: f32 = 0.5;

/// Project a pixel coordinate inside a `width` x `height` viewport onto
/// the unit sphere.
///
/// Pixel coordinates follow the usual screen convention (origin top-left,
/// y growing downward); the result lives in a right-handed, y-up camera
/// frame with +z toward the viewer, so the vertical axis is flipped
/// during normalization. The returned vector is always unit length with
/// z > 0.
///
/// A zero `width` or `height` cannot occur through the intended input
/// range (events only arrive from a live viewport) and is undefined
/// behavior in the floating-point sense: the result is non-finite, and
/// [`InputProcessor`](crate::input::InputProcessor) discards it.
#[must_use]
pub fn project_to_sphere(x: f32, y: f32, width: f32, height: f32) -> Vec3 {
    let xn = (x / width) * 2.0 - 1.0;
    let yn = -((y / height) * 2.0 - 1.0);

    let r2 = xn * xn + yn * yn;
    if r2 <= SHEET_THRESHOLD {
        // On the near hemisphere: x² + y² + z² = 1 by construction.
        Vec3::new(xn, yn, (1.0 - r2).sqrt())
    } else {
        // Past the silhouette: hyperbolic sheet z = 1 / (2·r), then
        // renormalize the full vector.
        Vec3::new(xn, yn, 1.0 / (2.0 * r2.sqrt())).normalize()
    }
}
