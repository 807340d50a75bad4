// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparisons against exact constants are routine in camera math
#![allow(clippy::float_cmp)]
// Single-letter vector/quaternion names are the domain vocabulary
#![allow(clippy::many_single_char_names, clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

//! Interactive 3D robot path viewer core.
//!
//! Pathview is the orientation and playback engine behind a motion-planning
//! path viewer: it turns pointer drags into a virtual-trackball rotation,
//! wheel events into a clamped camera distance, and replays a precomputed
//! sequence of robot poses as a looping, direction-reversing animation.
//! Rendering, windowing, and asset fetching stay on the host's side of the
//! boundary; the crate exchanges plain values with them
//! ([`frame::FrameState`] out, [`input::InputEvent`] in).
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - per-frame glue tying input, camera, and playback
//!   together
//! - [`camera::Trackball`] - the arcball rotation state machine
//! - [`playback::PathPlayer`] - ping-pong traversal over a pose sequence
//! - [`task`] - task/path/model text-file parsers
//! - [`options::Options`] - runtime configuration (camera limits, scene
//!   presets)
//!
//! # Architecture
//!
//! Everything is single-threaded and event-driven: the host delivers input
//! events as they arrive and calls [`viewer::Viewer::tick`] once per display
//! refresh. Input mutates the trackball and zoom state immediately; the tick
//! advances the path player exactly once and snapshots all three into a
//! [`frame::FrameState`] for the renderer. No locks, no interior mutability.

pub mod camera;
pub mod error;
pub mod frame;
pub mod input;
pub mod options;
pub mod playback;
pub mod task;
pub mod viewer;

pub use camera::{Trackball, ZoomControl};
pub use error::PathviewError;
pub use frame::{FrameState, Transform};
pub use input::{InputEvent, MouseButton};
pub use playback::{PathPlayer, Pose, PoseSequence};
pub use viewer::Viewer;
