//! Terminal rendering for the optotype game.
//!
//! This is a small, game-oriented rendering layer. It avoids widget toolkits
//! and instead renders into a plain framebuffer that is diffed and flushed to
//! the terminal.
//!
//! - [`game_view`] draws one screen per game phase from a `GameSnapshot`
//! - [`scroll`] keeps the current symbol's row in view
//! - [`render_throttle`] skips frames that would look identical
//! - [`renderer`] owns the terminal and writes changed cells

pub mod fb;
pub mod game_view;
pub mod optotype;
pub mod render_throttle;
pub mod renderer;
pub mod scroll;

pub use tui_optotype_core as core;
pub use tui_optotype_input as input;
pub use tui_optotype_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, GridLayout, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scroll::ScrollFollow;
