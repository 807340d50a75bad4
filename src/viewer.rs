//! Per-frame glue between input, camera state, and path playback.
//!
//! The host owns the event loop and the renderer; the [`Viewer`] owns
//! everything in between. Events arrive whenever the host delivers them;
//! [`Viewer::tick`] runs once per display refresh, advances the path
//! player exactly once, and snapshots the latest camera and pose state
//! into a [`FrameState`] for the renderer. The host guarantees events
//! and ticks never run concurrently, so the `&mut self` API is all the
//! serialization this needs.

use std::sync::Arc;

use glam::Vec3;

use crate::camera::{Trackball, ZoomControl};
use crate::frame::{
    camera_transform, obstacle_transform, robot_transform, FrameState,
};
use crate::input::{InputEvent, InputProcessor};
use crate::options::{CameraOptions, ScenePreset};
use crate::playback::{PathPlayer, PoseSequence};

/// Interactive scene state: trackball, zoom, input routing, and the
/// current path playback (if a scene is loaded).
#[derive(Debug)]
pub struct Viewer {
    trackball: Trackball,
    zoom: ZoomControl,
    input: InputProcessor,
    player: Option<PathPlayer>,
    obstacle_anchor: Vec3,
}

impl Viewer {
    /// Viewer for a viewport of the given pixel extent.
    ///
    /// No scene is loaded yet: [`tick`](Self::tick) returns `None` until
    /// [`load_scene`](Self::load_scene) installs a pose sequence.
    #[must_use]
    pub fn new(width: f32, height: f32, options: &CameraOptions) -> Self {
        Self {
            trackball: Trackball::new(),
            // Fully zoomed out until a scene preset overrides it
            zoom: ZoomControl::new(options.zoom.max, options.zoom),
            input: InputProcessor::new(width, height),
            player: None,
            obstacle_anchor: Vec3::ZERO,
        }
    }

    /// Install a scene: start playback of `poses` from its first pose
    /// and reset the view to the preset's initial zoom and rotation.
    /// Any drag in progress is cancelled by the rotation reset.
    pub fn load_scene(
        &mut self,
        poses: Arc<PoseSequence>,
        obstacle_anchor: Vec3,
        preset: &ScenePreset,
    ) {
        log::debug!(
            "installing scene: {} pose(s), zoom {}",
            poses.len(),
            preset.initial_zoom
        );
        self.trackball.set_rotation(preset.rotation());
        self.zoom.set_distance(preset.initial_zoom);
        self.player = Some(PathPlayer::new(poses));
        self.obstacle_anchor = obstacle_anchor;
    }

    /// Feed one input event through the processor.
    ///
    /// Returns `true` if the event was consumed by the camera.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event, &mut self.trackball, &mut self.zoom)
    }

    /// Advance one frame and compose the transforms for the renderer.
    ///
    /// The path player steps exactly once per call regardless of how
    /// many input events arrived since the previous frame; the camera
    /// reads whatever rotation and distance those events left behind.
    /// Returns `None` until a scene is loaded.
    pub fn tick(&mut self) -> Option<FrameState> {
        let player = self.player.as_mut()?;
        let pose = player.tick();

        Some(FrameState {
            camera: camera_transform(
                self.trackball.rotation(),
                self.zoom.distance(),
            ),
            robot: robot_transform(pose),
            obstacles: obstacle_transform(self.obstacle_anchor),
        })
    }

    /// The trackball, for hosts that reset or query the view directly.
    #[must_use]
    pub fn trackball(&self) -> &Trackball {
        &self.trackball
    }

    /// Current camera distance.
    #[must_use]
    pub fn zoom_distance(&self) -> f32 {
        self.zoom.distance()
    }
}
