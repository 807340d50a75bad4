//! Virtual trackball (arcball) rotation.
//!
//! Converts sphere points produced by
//! [`project_to_sphere`](super::project_to_sphere) into an orientation
//! quaternion. A drag session snapshots the orientation at pointer-down
//! and composes the incremental rotation from the drag-start point to
//! the current point onto that baseline, so successive drags accumulate.

use glam::{Quat, Vec3};

/// Ephemeral per-drag state: the sphere point and orientation captured
/// at pointer-down.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Sphere point where the drag began.
    start_point: Vec3,
    /// Orientation at drag start; the increment is composed onto this,
    /// never onto the live orientation, so one drag never feeds back
    /// into itself.
    base_orientation: Quat,
}

/// Arcball rotation state machine.
///
/// Owns the current orientation and the active [`DragSession`] (if any).
/// While no session is active, [`update_drag`](Self::update_drag) is a
/// defined no-op.
#[derive(Debug, Clone, Copy)]
pub struct Trackball {
    current: Quat,
    drag: Option<DragSession>,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new()
    }
}

impl Trackball {
    /// Trackball at the identity orientation with no active drag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Quat::IDENTITY,
            drag: None,
        }
    }

    /// Current orientation quaternion. Safe to call at any time,
    /// including mid-drag.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.current
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag at sphere point `p`, snapshotting the current
    /// orientation as the session baseline. A call while a session is
    /// already active replaces it; sessions never stack.
    pub fn begin_drag(&mut self, p: Vec3) {
        self.drag = Some(DragSession {
            start_point: p,
            base_orientation: self.current,
        });
    }

    /// Update the active drag with a new sphere point.
    ///
    /// The incremental rotation taking the drag-start point to `p` is the
    /// quaternion `(v, d)` with `v = p × start` and `d = p · start`, the
    /// minimal rotation between the two unit vectors, no angle/axis
    /// extraction needed. It is composed onto the baseline orientation
    /// and the result renormalized; renormalizing on every update keeps
    /// per-event floating-point drift from compounding over a long drag.
    ///
    /// No-op when no session is active.
    pub fn update_drag(&mut self, p: Vec3) {
        let Some(session) = self.drag else {
            return;
        };

        let v = p.cross(session.start_point);
        let d = p.dot(session.start_point);
        let increment = Quat::from_xyzw(v.x, v.y, v.z, d);

        self.current = (session.base_orientation * increment).normalize();
    }

    /// End the active drag session (pointer-up or pointer-leave).
    ///
    /// The orientation last produced by
    /// [`update_drag`](Self::update_drag) stays current and becomes the
    /// next session's baseline.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Replace the orientation outright (scene-switch reset path).
    ///
    /// Normalizes `q` and cancels any active drag session.
    pub fn set_rotation(&mut self, q: Quat) {
        self.current = q.normalize();
        self.drag = None;
    }
}
