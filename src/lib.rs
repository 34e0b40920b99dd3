//! TUI Optotype (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_optotype::{core,input,term,types}` and owns the
//! binary-side concerns (configuration and the session log).

pub mod config;
pub mod session_log;

pub use tui_optotype_core as core;
pub use tui_optotype_input as input;
pub use tui_optotype_term as term;
pub use tui_optotype_types as types;
