//! On-screen directional control pad.
//!
//! The view lays the pad out; this module only knows where the buttons are and
//! which one a click landed on.
//!
//! ```text
//!        [ ↑ ]
//!  [ ← ] [ ↓ ] [ → ]
//! ```

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction};

/// Terminal cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col - self.x) < self.w
            && (row - self.y) < self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadButton {
    pub direction: Direction,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPad {
    buttons: [PadButton; 4],
}

impl ControlPad {
    /// Lay out the cross with its top-left corner at `(x, y)`.
    pub fn layout(x: u16, y: u16, button_w: u16, button_h: u16, gap: u16) -> Self {
        let col = |i: u16| x.saturating_add(i * (button_w + gap));
        let row = |i: u16| y.saturating_add(i * button_h);
        let rect = |c: u16, r: u16| Rect::new(col(c), row(r), button_w, button_h);
        Self {
            buttons: [
                PadButton {
                    direction: Direction::Up,
                    rect: rect(1, 0),
                },
                PadButton {
                    direction: Direction::Left,
                    rect: rect(0, 1),
                },
                PadButton {
                    direction: Direction::Down,
                    rect: rect(1, 1),
                },
                PadButton {
                    direction: Direction::Right,
                    rect: rect(2, 1),
                },
            ],
        }
    }

    /// Outer width of a pad built by [`ControlPad::layout`].
    pub fn width(button_w: u16, gap: u16) -> u16 {
        button_w * 3 + gap * 2
    }

    /// Outer height of a pad built by [`ControlPad::layout`].
    pub fn height(button_h: u16) -> u16 {
        button_h * 2
    }

    pub fn buttons(&self) -> &[PadButton; 4] {
        &self.buttons
    }

    pub fn hit(&self, col: u16, row: u16) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(col, row))
            .map(|b| b.direction)
    }
}

/// Map a left-button press on a pad button to an answer.
pub fn handle_mouse_event(event: MouseEvent, pad: &ControlPad) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            pad.hit(event.column, event.row).map(GameAction::Input)
        }
        _ => None,
    }
}
