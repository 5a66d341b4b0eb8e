//! Pointer event vocabulary for host-delivered input.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in the shared/global coordinate space of the scene, so a
/// drag delta stays meaningful regardless of which item the pointer is over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
}

impl PointerEvent {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position, .. } => {
                *position
            }
        }
    }

    /// Shorthand for a left-button press.
    pub fn left_down(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
        }
    }

    /// Shorthand for a left-button release.
    pub fn left_up(position: Point) -> Self {
        Self::Up {
            position,
            button: MouseButton::Left,
        }
    }
}
