//! Platform-agnostic input events.
//!
//! Hosts translate whatever their windowing layer produces (DOM events,
//! winit `WindowEvent`s, test fixtures) into these values and feed them
//! to an [`InputProcessor`](super::InputProcessor). Raw event-object
//! unpacking stays on the host's side of the boundary.

/// A single input event in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels from the viewport's left edge.
        x: f32,
        /// Vertical position in pixels from the viewport's top edge.
        y: f32,
    },
    /// Cursor left the viewport; cancels any drag in progress.
    CursorLeft,
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel delta; only the sign is honored downstream.
    Scroll {
        /// Raw wheel delta (positive = zoom out, matching wheel-down).
        delta: f32,
    },
    /// Viewport resized; subsequent cursor positions are normalized
    /// against the new extent.
    Resized {
        /// New viewport width in pixels.
        width: f32,
        /// New viewport height in pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button; drives the trackball.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
