//! Platform-agnostic pointer input types.
//!
//! Provides [`PointerButton`], [`ButtonSelector`] and [`PointerEvent`]
//! without depending on any windowing crate. Platform layers (e.g. winit)
//! map their native events to these types.

use std::str::FromStr;

use thiserror::Error;

/// Physical pointer button identifier.
///
/// Mirrors the buttons reported by desktop pointing devices. Additional
/// hardware buttons arrive as [`PointerButton::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Navigate-back side button.
    Back,
    /// Navigate-forward side button.
    Forward,
    /// Any other hardware button, by platform-specific index.
    Other(u16),
}

/// Selects which pointer button activates a look session.
///
/// Default: [`ButtonSelector::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSelector {
    /// Every button qualifies, including side and extra buttons.
    Any,
    #[default]
    Left,
    Middle,
    Right,
}

impl ButtonSelector {
    /// Returns `true` if a press of `button` satisfies this selector.
    pub fn matches(&self, button: PointerButton) -> bool {
        match self {
            ButtonSelector::Any => true,
            ButtonSelector::Left => button == PointerButton::Left,
            ButtonSelector::Middle => button == PointerButton::Middle,
            ButtonSelector::Right => button == PointerButton::Right,
        }
    }
}

/// Error returned when a button selector name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown button selector `{0}` (expected `any`, `left`, `middle` or `right`)")]
pub struct ParseButtonSelectorError(String);

impl FromStr for ButtonSelector {
    type Err = ParseButtonSelectorError;

    /// Parses a selector name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(ButtonSelector::Any),
            "left" => Ok(ButtonSelector::Left),
            "middle" => Ok(ButtonSelector::Middle),
            "right" => Ok(ButtonSelector::Right),
            _ => Err(ParseButtonSelectorError(s.to_owned())),
        }
    }
}

/// Pointer event in an input surface's local pixel space.
///
/// `x` grows rightward and `y` grows downward, the usual screen
/// convention. Events are delivered in the order the surface saw them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down at the given position.
    Pressed { button: PointerButton, x: f32, y: f32 },
    /// The pointer moved to the given position.
    Moved { x: f32, y: f32 },
    /// A button went up at the given position.
    Released { button: PointerButton, x: f32, y: f32 },
    /// The pointer left the surface entirely.
    Exited,
}
