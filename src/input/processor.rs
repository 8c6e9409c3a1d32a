//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns the transient pointer state (position, held
//! button, drag detection). It is the only thing that sits between raw
//! window events and [`BodyView`](crate::view::BodyView).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::{PointerState, Release};
use crate::options::InputOptions;

/// What the view should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Orbit the camera by a pointer drag of `delta` pixels.
    Orbit {
        /// Cursor motion in pixels.
        delta: Vec2,
    },
    /// Pan the camera by a pointer drag of `delta` pixels.
    Pan {
        /// Cursor motion in pixels.
        delta: Vec2,
    },
    /// Zoom the camera (positive = closer).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// The surface changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Primary-button click at a pixel position: resolve a pick.
    Select {
        /// Cursor position in physical pixels.
        position: Vec2,
    },
}

/// Converts [`InputEvent`]s into [`ViewCommand`]s.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    pointer: PointerState,
}

impl InputProcessor {
    /// Processor using the drag threshold from `opts`.
    #[must_use]
    pub fn new(opts: &InputOptions) -> Self {
        Self {
            pointer: PointerState::new(opts.drag_threshold),
        }
    }

    /// Read-only access to the pointer state.
    #[must_use]
    pub const fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom { delta }),
            InputEvent::Resized { width, height } => {
                Some(ViewCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: camera commands only once a press became a drag.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewCommand> {
        let delta = self.pointer.handle_mouse_position(x, y);
        if !self.pointer.is_dragging() {
            return None;
        }
        match self.pointer.held_button()? {
            MouseButton::Left => Some(ViewCommand::Orbit { delta }),
            MouseButton::Right | MouseButton::Middle => {
                Some(ViewCommand::Pan { delta })
            }
        }
    }

    /// Button press/release: selection only on a primary-button click.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        if pressed {
            self.pointer.handle_mouse_down(button);
            return None;
        }
        match self.pointer.process_mouse_up(button) {
            Release::Click {
                button: MouseButton::Left,
                position,
            } => Some(ViewCommand::Select { position }),
            Release::Click { .. } | Release::DragEnd | Release::Ignored => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&InputOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn left_click_selects() {
        let mut input = InputProcessor::default();
        assert_eq!(input.handle_event(moved(50.0, 60.0)), None);
        assert_eq!(input.handle_event(press(MouseButton::Left)), None);
        assert_eq!(
            input.handle_event(release(MouseButton::Left)),
            Some(ViewCommand::Select {
                position: Vec2::new(50.0, 60.0)
            })
        );
    }

    #[test]
    fn left_drag_orbits_without_selecting() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press(MouseButton::Left));
        // Below the threshold: no camera motion yet.
        assert_eq!(input.handle_event(moved(1.0, 0.0)), None);
        assert_eq!(
            input.handle_event(moved(11.0, 0.0)),
            Some(ViewCommand::Orbit {
                delta: Vec2::new(10.0, 0.0)
            })
        );
        assert_eq!(input.handle_event(release(MouseButton::Left)), None);
    }

    #[test]
    fn right_drag_pans_and_right_click_is_ignored() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(moved(0.0, 0.0));
        let _ = input.handle_event(press(MouseButton::Right));
        assert_eq!(
            input.handle_event(moved(0.0, 20.0)),
            Some(ViewCommand::Pan {
                delta: Vec2::new(0.0, 20.0)
            })
        );
        assert_eq!(input.handle_event(release(MouseButton::Right)), None);

        let _ = input.handle_event(press(MouseButton::Right));
        assert_eq!(input.handle_event(release(MouseButton::Right)), None);
    }

    #[test]
    fn scroll_and_resize_pass_through() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(ViewCommand::Zoom { delta: 1.5 })
        );
        assert_eq!(
            input.handle_event(InputEvent::Resized {
                width: 640,
                height: 480
            }),
            Some(ViewCommand::Resize {
                width: 640,
                height: 480
            })
        );
    }
}
