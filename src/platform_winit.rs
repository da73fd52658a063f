//! winit platform layer.
//!
//! Converts winit window events into crate-agnostic [`PointerEvent`]s.
//! winit reports button changes without coordinates, so the adapter
//! remembers the latest cursor position and stamps it onto presses and
//! releases.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::input::{PointerButton, PointerEvent};

/// Convert a winit [`MouseButton`] to a [`PointerButton`].
pub fn map_winit_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Back,
        MouseButton::Forward => PointerButton::Forward,
        MouseButton::Other(index) => PointerButton::Other(index),
    }
}

/// Stateful translator from winit window events to pointer events.
///
/// One adapter per window. Feed every [`WindowEvent`] through
/// [`WinitPointerAdapter::map_window_event`] and dispatch whatever comes
/// back into an [`crate::surface::InputSurface`].
#[derive(Debug, Default)]
pub struct WinitPointerAdapter {
    cursor: Option<Vec2>,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event, if it concerns the pointer.
    ///
    /// Presses that arrive before any cursor position is known are
    /// dropped: without coordinates they would anchor a drag at a
    /// made-up point. Releases always pass through so a held session
    /// can end.
    pub fn map_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.cursor = Some(position);
                Some(PointerEvent::Moved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.map_button_change(*state, map_winit_button(*button))
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Some(PointerEvent::Exited)
            }
            _ => None,
        }
    }

    fn map_button_change(
        &self,
        state: ElementState,
        button: PointerButton,
    ) -> Option<PointerEvent> {
        match state {
            ElementState::Pressed => {
                let position = self.cursor?;
                Some(PointerEvent::Pressed {
                    button,
                    x: position.x,
                    y: position.y,
                })
            }
            ElementState::Released => {
                let position = self.cursor.unwrap_or(Vec2::ZERO);
                Some(PointerEvent::Released {
                    button,
                    x: position.x,
                    y: position.y,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_losslessly() {
        assert_eq!(map_winit_button(MouseButton::Left), PointerButton::Left);
        assert_eq!(map_winit_button(MouseButton::Right), PointerButton::Right);
        assert_eq!(map_winit_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(map_winit_button(MouseButton::Back), PointerButton::Back);
        assert_eq!(
            map_winit_button(MouseButton::Forward),
            PointerButton::Forward
        );
        assert_eq!(
            map_winit_button(MouseButton::Other(9)),
            PointerButton::Other(9)
        );
    }

    #[test]
    fn press_requires_a_known_cursor() {
        let adapter = WinitPointerAdapter::new();
        assert_eq!(
            adapter.map_button_change(ElementState::Pressed, PointerButton::Left),
            None
        );

        let mut adapter = WinitPointerAdapter::new();
        adapter.cursor = Some(Vec2::new(12.0, 34.0));
        assert_eq!(
            adapter.map_button_change(ElementState::Pressed, PointerButton::Left),
            Some(PointerEvent::Pressed {
                button: PointerButton::Left,
                x: 12.0,
                y: 34.0,
            })
        );
    }

    #[test]
    fn release_passes_through_without_a_cursor() {
        let adapter = WinitPointerAdapter::new();
        assert_eq!(
            adapter.map_button_change(ElementState::Released, PointerButton::Left),
            Some(PointerEvent::Released {
                button: PointerButton::Left,
                x: 0.0,
                y: 0.0,
            })
        );
    }
}
