//! Input handling: platform-agnostic event types and the processor that
//! routes them to the camera state.

/// Platform-agnostic input events.
pub mod event;
/// Routes events to the trackball and zoom control.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
