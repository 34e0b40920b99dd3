//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, phase state machine, and timing logic.
//! It has **zero dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical symbol sequences
//! - **Testable**: Time is fed in as elapsed milliseconds and input timestamps
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: Phase state machine (menu, tutorial, countdown, playing, finished)
//! - [`sequence`]: Random optotype sequence generation
//! - [`debounce`]: Minimum-interval gate for inputs
//! - [`tutorial`]: Four-step practice flow
//! - [`clock`]: Phase-scoped one-second interval timer
//! - [`events`]: Events and the observer hook
//! - [`rng`]: Seeded LCG
//!
//! # Game Rules
//!
//! - A run presents `symbol_count` optotypes; one is current at a time
//! - Answering marks it correct or wrong and moves to the next
//! - A 3 second countdown precedes 30 seconds of play
//! - The run ends when time runs out or every symbol is answered
//! - Final score is `correct - errors`
//!
//! # Example
//!
//! ```
//! use tui_optotype_core::GameState;
//! use tui_optotype_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start, 0);
//! assert_eq!(game.phase(), GamePhase::Countdown);
//!
//! // Three clock seconds later play begins.
//! game.tick(3000);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! let expected = game.current_symbol().unwrap().direction;
//! game.handle_input(expected, 3000);
//! assert_eq!(game.stats().correct, 1);
//! ```

pub mod clock;
pub mod config;
pub mod debounce;
pub mod events;
pub mod game_state;
pub mod rng;
pub mod sequence;
pub mod snapshot;
pub mod tutorial;

pub use tui_optotype_types as types;

// Re-export commonly used types for convenience
pub use clock::{IntervalTimer, PhaseTimer};
pub use config::GameConfig;
pub use debounce::InputDebouncer;
pub use events::{GameEvent, GameObserver, EVENT_CAPACITY};
pub use game_state::{GameState, GameStats};
pub use rng::SimpleRng;
pub use sequence::{generate_symbols, SymbolId, SymbolItem};
pub use snapshot::GameSnapshot;
pub use tutorial::{Tutorial, TutorialOutcome};
