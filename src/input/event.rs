/// Platform-agnostic input events.
///
/// Hosts translate their windowing events into these and feed them to
/// [`BodyView::handle_event`](crate::view::BodyView::handle_event).
///
/// # Example
///
/// ```
/// use mannequin::input::{InputEvent, MouseButton};
///
/// let events = [
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: false },
/// ];
/// assert_eq!(events.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// The drawing surface changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
