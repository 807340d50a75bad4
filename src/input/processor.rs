//! Converts raw input events into camera mutations.
//!
//! The `InputProcessor` owns all transient input state (viewport extent,
//! cursor position, button state) and is the only thing sitting between
//! host events and the [`Trackball`]/[`ZoomControl`] pair. It also
//! guards the trackball against non-finite sphere points: a NaN entering
//! quaternion normalization would poison every later frame.

use glam::Vec3;

use crate::camera::{project_to_sphere, Trackball, ZoomControl};

use super::event::{InputEvent, MouseButton};

/// Routes [`InputEvent`]s to the camera state.
///
/// Events are applied immediately (event-driven, not queued for the
/// tick); the host guarantees they never race the frame tick.
#[derive(Debug, Clone, Copy)]
pub struct InputProcessor {
    viewport: (f32, f32),
    cursor: (f32, f32),
    left_pressed: bool,
}

impl InputProcessor {
    /// Processor for a viewport of the given pixel extent.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: (width, height),
            cursor: (0.0, 0.0),
            left_pressed: false,
        }
    }

    /// Apply one event to the trackball and zoom control.
    ///
    /// Returns `true` if the event was consumed by the camera.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        trackball: &mut Trackball,
        zoom: &mut ZoomControl,
    ) -> bool {
        match event {
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.left_pressed = pressed;
                if pressed {
                    if let Some(p) = self.sphere_point() {
                        trackball.begin_drag(p);
                    }
                } else {
                    trackball.end_drag();
                }
                true
            }
            InputEvent::MouseButton { .. } => false,
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
                if self.left_pressed {
                    if let Some(p) = self.sphere_point() {
                        trackball.update_drag(p);
                    }
                }
                true
            }
            InputEvent::CursorLeft => {
                // Mouse-leave ends the session exactly like a release
                self.left_pressed = false;
                trackball.end_drag();
                true
            }
            InputEvent::Scroll { delta } => {
                if delta.is_finite() {
                    zoom.apply_delta(delta);
                    true
                } else {
                    log::warn!("discarding non-finite scroll delta");
                    false
                }
            }
            InputEvent::Resized { width, height } => {
                self.viewport = (width, height);
                true
            }
        }
    }

    /// Project the tracked cursor onto the unit sphere, discarding
    /// non-finite results before they can reach the trackball.
    fn sphere_point(&self) -> Option<Vec3> {
        let p = project_to_sphere(
            self.cursor.0,
            self.cursor.1,
            self.viewport.0,
            self.viewport.1,
        );
        if p.is_finite() {
            Some(p)
        } else {
            log::warn!(
                "discarding non-finite sphere point from cursor ({}, {})",
                self.cursor.0,
                self.cursor.1
            );
            None
        }
    }
}
