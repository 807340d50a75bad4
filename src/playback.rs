//! Pose sequence playback with ping-pong traversal.
//!
//! The player walks a precomputed path forward, then replays it in
//! reverse from the far end, forever. Replay is a direct index lookup per
//! tick. No interpolation, no timing, no smoothing; the host's frame
//! rate is the clock.

use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::error::PathviewError;

/// A rigid-body placement: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in the scene's recentered frame.
    pub position: Vec3,
    /// Unit orientation quaternion.
    pub orientation: Quat,
}

/// An ordered, non-empty, immutable sequence of poses.
///
/// Built once at scene load and shared read-only (the player holds an
/// `Arc`, never a copy). Construction is the only place emptiness can be
/// rejected, so it is.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSequence {
    poses: Vec<Pose>,
}

impl PoseSequence {
    /// Wrap a list of poses, rejecting an empty list: a player over an
    /// empty sequence would have no valid `current_pose`.
    ///
    /// # Errors
    ///
    /// [`PathviewError::EmptyPath`] if `poses` is empty.
    pub fn new(poses: Vec<Pose>) -> Result<Self, PathviewError> {
        if poses.is_empty() {
            return Err(PathviewError::EmptyPath);
        }
        Ok(Self { poses })
    }

    /// Number of poses (always >= 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Always `false` (emptiness is rejected at construction); kept for
    /// API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Pose at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. [`PathPlayer`] keeps its cursor in
    /// range by construction and never trips this.
    #[must_use]
    pub fn pose(&self, index: usize) -> Pose {
        self.poses[index]
    }
}

/// Ping-pong player over a [`PoseSequence`].
///
/// The cursor is a signed index: its absolute value is the pose to show
/// and its sign the travel direction. Starting at 0 the traversal runs
/// 0, 1, .., N-1, then jumps to -(N-1) and counts back up through 0:
/// a forward sweep followed by a full-length reverse sweep restarting
/// from the far end. The reversal point is asymmetric (the flip fires at
/// `N-1`, so the forward sweep never occupies that cursor state); this
/// reproduces the observed playback timing exactly and is part of the
/// contract, not an artifact to smooth over.
#[derive(Debug, Clone)]
pub struct PathPlayer {
    poses: Arc<PoseSequence>,
    cursor: i32,
}

impl PathPlayer {
    /// Player over `poses`, cursor at 0.
    #[must_use]
    pub fn new(poses: Arc<PoseSequence>) -> Self {
        Self { poses, cursor: 0 }
    }

    /// Advance one frame: return the pose at `|cursor|`, then step the
    /// cursor, flipping to `-(N-1)` once it reaches `N-1`.
    ///
    /// With N = 1 the flip fires immediately and the cursor pins at 0;
    /// playback is static but well defined.
    pub fn tick(&mut self) -> Pose {
        let pose = self.poses.pose(self.cursor.unsigned_abs() as usize);

        self.cursor += 1;
        let last = self.poses.len() as i32 - 1;
        if self.cursor >= last {
            self.cursor = -last;
        }

        pose
    }

    /// Pose at the current cursor without advancing. Valid before the
    /// first [`tick`](Self::tick) (returns the first pose).
    #[must_use]
    pub fn current_pose(&self) -> Pose {
        self.poses.pose(self.cursor.unsigned_abs() as usize)
    }

    /// Rewind to the start of the forward sweep (new-sequence path).
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// The shared sequence under playback.
    #[must_use]
    pub fn sequence(&self) -> &Arc<PoseSequence> {
        &self.poses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(n: usize) -> Arc<PoseSequence> {
        // Encode the index in x so tests can read it back
        let poses = (0..n)
            .map(|i| Pose {
                position: Vec3::new(i as f32, 0.0, 0.0),
                orientation: Quat::IDENTITY,
            })
            .collect();
        match PoseSequence::new(poses) {
            Ok(seq) => Arc::new(seq),
            Err(e) => panic!("fixture must build: {e}"),
        }
    }

    fn indices(player: &mut PathPlayer, ticks: usize) -> Vec<usize> {
        (0..ticks).map(|_| player.tick().position.x as usize).collect()
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(
            PoseSequence::new(Vec::new()),
            Err(PathviewError::EmptyPath)
        ));
    }

    #[test]
    fn test_pingpong_n5() {
        // Forward sweep 0..4, then reverse from the far end. Derived by
        // hand from the cursor arithmetic: read |c|, c += 1, flip to
        // -(N-1) at c >= N-1.
        let mut player = PathPlayer::new(sequence(5));
        assert_eq!(
            indices(&mut player, 12),
            vec![0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2, 3]
        );
    }

    #[test]
    fn test_pingpong_n3() {
        let mut player = PathPlayer::new(sequence(3));
        assert_eq!(
            indices(&mut player, 9),
            vec![0, 1, 2, 1, 0, 1, 2, 1, 0]
        );
    }

    #[test]
    fn test_pingpong_n2() {
        let mut player = PathPlayer::new(sequence(2));
        assert_eq!(indices(&mut player, 6), vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_single_pose_is_static() {
        let mut player = PathPlayer::new(sequence(1));
        for _ in 0..50 {
            assert_eq!(player.tick().position.x as usize, 0);
            assert_eq!(player.current_pose().position.x as usize, 0);
        }
    }

    #[test]
    fn test_current_pose_before_first_tick() {
        let player = PathPlayer::new(sequence(4));
        assert_eq!(player.current_pose().position.x as usize, 0);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut player = PathPlayer::new(sequence(3));
        for _ in 0..100 {
            let _ = player.tick();
            assert!((player.cursor.unsigned_abs() as usize) < 3);
        }
    }

    #[test]
    fn test_reset_restarts_forward_sweep() {
        let mut player = PathPlayer::new(sequence(4));
        let _ = indices(&mut player, 5);
        player.reset();
        assert_eq!(indices(&mut player, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sequence_is_shared_not_copied() {
        let seq = sequence(3);
        let player = PathPlayer::new(Arc::clone(&seq));
        assert!(Arc::ptr_eq(player.sequence(), &seq));
    }
}
