use glam::Vec2;

use super::event::MouseButton;

/// What a button release amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Pressed and released without moving past the drag threshold.
    Click {
        /// Button that was released.
        button: MouseButton,
        /// Cursor position at release, in physical pixels.
        position: Vec2,
    },
    /// The cursor travelled far enough to count as a drag.
    DragEnd,
    /// Release with no matching press (or a different button).
    Ignored,
}

/// Tracks cursor position, the held button and whether the current press
/// has turned into a drag.
#[derive(Debug, Clone)]
pub struct PointerState {
    position: Option<Vec2>,
    pressed: Option<(MouseButton, Vec2)>,
    is_dragging: bool,
    drag_threshold: f32,
}

impl PointerState {
    /// Pointer with no known position and nothing pressed. Presses that
    /// travel at least `drag_threshold` pixels become drags.
    #[must_use]
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            position: None,
            pressed: None,
            is_dragging: false,
            drag_threshold: drag_threshold.max(0.0),
        }
    }

    /// Last cursor position, once one has been reported.
    #[must_use]
    pub const fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Button currently held down, if any.
    #[must_use]
    pub fn held_button(&self) -> Option<MouseButton> {
        self.pressed.map(|(button, _)| button)
    }

    /// Whether the current press has become a drag.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Record a cursor move and return the motion since the previous
    /// position (zero for the first report).
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let new = Vec2::new(x, y);
        let delta = self.position.map_or(Vec2::ZERO, |old| new - old);
        self.position = Some(new);

        if let Some((_, origin)) = self.pressed {
            if !self.is_dragging && new.distance(origin) >= self.drag_threshold {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Record a button press at the current cursor position.
    ///
    /// Ignored while another button is held or before any position is known.
    pub fn handle_mouse_down(&mut self, button: MouseButton) {
        if self.pressed.is_some() {
            return;
        }
        if let Some(position) = self.position {
            self.pressed = Some((button, position));
            self.is_dragging = false;
        }
    }

    /// Process a button release and classify the gesture.
    pub fn process_mouse_up(&mut self, button: MouseButton) -> Release {
        match self.pressed {
            Some((held, _)) if held == button => {}
            _ => return Release::Ignored,
        }
        self.pressed = None;
        let was_dragging = std::mem::take(&mut self.is_dragging);

        match self.position {
            Some(position) if !was_dragging => Release::Click { button, position },
            _ => Release::DragEnd,
        }
    }
}
