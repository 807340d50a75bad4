//! Camera distance ("zoom") control.
//!
//! Wheel deltas arrive with wildly platform-dependent magnitudes, so only
//! their sign is honored: each event moves the distance by one fixed step
//! and the result is clamped to the configured range.

use serde::{Deserialize, Serialize};

/// Configured distance range and per-event step size.
///
/// The bounds are scene-dependent external configuration (a small indoor
/// scene wants a tighter range than an asteroid field), not constants of
/// the control itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    /// Minimum camera distance.
    pub min: f32,
    /// Maximum camera distance.
    pub max: f32,
    /// Distance change per wheel event.
    pub step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 2000.0,
            step: 25.0,
        }
    }
}

/// Scalar camera distance bounded by [`ZoomLimits`].
#[derive(Debug, Clone, Copy)]
pub struct ZoomControl {
    distance: f32,
    limits: ZoomLimits,
}

impl ZoomControl {
    /// Control starting at `distance` (clamped into range).
    #[must_use]
    pub fn new(distance: f32, limits: ZoomLimits) -> Self {
        Self {
            distance: distance.clamp(limits.min, limits.max),
            limits,
        }
    }

    /// Current camera distance, always within the configured range.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a raw wheel delta: one step in the direction of its sign,
    /// magnitude ignored. A zero delta changes nothing.
    pub fn apply_delta(&mut self, raw: f32) {
        if raw == 0.0 {
            return;
        }
        self.distance = (self.distance + raw.signum() * self.limits.step)
            .clamp(self.limits.min, self.limits.max);
    }

    /// Reset the distance (scene-switch path), clamped into range.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.limits.min, self.limits.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_sign_only() {
        let mut zoom = ZoomControl::new(650.0, ZoomLimits::default());
        zoom.apply_delta(0.003);
        assert_eq!(zoom.distance(), 675.0);
        zoom.apply_delta(1200.0);
        assert_eq!(zoom.distance(), 700.0);
        zoom.apply_delta(-0.5);
        assert_eq!(zoom.distance(), 675.0);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut zoom = ZoomControl::new(650.0, ZoomLimits::default());
        zoom.apply_delta(0.0);
        assert_eq!(zoom.distance(), 650.0);
    }

    #[test]
    fn test_never_exceeds_max() {
        let mut zoom = ZoomControl::new(650.0, ZoomLimits::default());
        for _ in 0..1001 {
            zoom.apply_delta(3.7);
            assert!(zoom.distance() <= 2000.0);
        }
        assert_eq!(zoom.distance(), 2000.0);
    }

    #[test]
    fn test_never_drops_below_min() {
        let mut zoom = ZoomControl::new(650.0, ZoomLimits::default());
        for _ in 0..1001 {
            zoom.apply_delta(-0.01);
            assert!(zoom.distance() >= 100.0);
        }
        assert_eq!(zoom.distance(), 100.0);
    }

    #[test]
    fn test_initial_distance_clamped() {
        let zoom = ZoomControl::new(5000.0, ZoomLimits::default());
        assert_eq!(zoom.distance(), 2000.0);
        let zoom = ZoomControl::new(0.0, ZoomLimits::default());
        assert_eq!(zoom.distance(), 100.0);
    }

    #[test]
    fn test_custom_limits() {
        let limits = ZoomLimits {
            min: 500.0,
            max: 2000.0,
            step: 25.0,
        };
        let mut zoom = ZoomControl::new(500.0, limits);
        zoom.apply_delta(-1.0);
        assert_eq!(zoom.distance(), 500.0);
        zoom.apply_delta(1.0);
        assert_eq!(zoom.distance(), 525.0);
    }
}
