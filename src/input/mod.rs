//! Input handling: event types, pointer state, viewport mapping, and the
//! processor that converts raw window events into view commands.

/// Platform-agnostic input events.
pub mod event;
/// Click/drag detection and cursor tracking.
pub mod mouse;
/// Converts raw events into view commands.
pub mod processor;
/// Pixel to normalized-device-coordinate mapping.
pub mod viewport;

pub use event::{InputEvent, MouseButton};
pub use mouse::{PointerState, Release};
pub use processor::{InputProcessor, ViewCommand};
pub use viewport::Viewport;
