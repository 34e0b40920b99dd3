//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any renderer. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and hit-tests mouse
//! clicks against the on-screen control pad, so both transports end up at the
//! same input entry point of the game.

pub mod map;
pub mod pad;

pub use tui_optotype_types as types;

pub use map::{handle_key_event, should_quit};
pub use pad::{handle_mouse_event, ControlPad, PadButton, Rect};
