//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, logging).
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Outer loop timestep |
//! | `CLOCK_INTERVAL_MS` | 1000 | Game clock interval (one second) |
//! | `COUNTDOWN_SECONDS` | 3 | Countdown before play starts |
//! | `GAME_DURATION_SECONDS` | 30 | Length of a run |
//! | `INPUT_DEBOUNCE_MS` | 80 | Minimum gap between accepted inputs |
//!
//! # Examples
//!
//! ```
//! use tui_optotype_types::{Direction, GameAction, GamePhase};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("Up"), Some(Direction::Up));
//!
//! // Directions round-trip through their index
//! assert_eq!(Direction::from_index(3), Direction::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("skipTutorial").unwrap();
//! assert_eq!(action, GameAction::SkipTutorial);
//!
//! assert!(GamePhase::Playing.has_clock());
//! assert!(!GamePhase::Menu.has_clock());
//! ```

/// Fixed timestep interval of the outer loop in milliseconds.
pub const TICK_MS: u32 = 50;

/// Game clock interval (1000ms = one displayed second).
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// Seconds shown on the countdown screen before play starts.
pub const COUNTDOWN_SECONDS: u32 = 3;

/// Seconds of play per run.
pub const GAME_DURATION_SECONDS: u32 = 30;

/// Symbols generated per run (enough for 30 seconds of fast play).
pub const SYMBOL_COUNT: u32 = 200;

/// Minimum interval between two accepted inputs.
pub const INPUT_DEBOUNCE_MS: u64 = 80;

/// Last tutorial step; a correct answer here leaves the tutorial.
pub const TUTORIAL_LAST_STEP: u8 = 3;


/// The four orientations an optotype can point to
///
/// The direction is where the open prongs of the "E" face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map an index to a direction (wraps modulo 4).
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_optotype_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Phases of the game state machine
///
/// MENU is the initial phase. FINISHED is terminal until a restart or a
/// return to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Menu,
    Tutorial,
    Countdown,
    Playing,
    Finished,
}

impl GamePhase {
    /// Whether this phase owns a running clock.
    pub fn has_clock(&self) -> bool {
        matches!(self, GamePhase::Countdown | GamePhase::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Tutorial => "tutorial",
            GamePhase::Countdown => "countdown",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
        }
    }
}

/// Per-symbol progress marker
///
/// - **Pending**: not reached yet
/// - **Current**: awaiting the player's answer (exactly one during play)
/// - **Correct** / **Wrong**: answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolStatus {
    Pending,
    Current,
    Correct,
    Wrong,
}

/// Game actions that can be applied to modify game state
///
/// Both the keyboard and the on-screen control pad produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A directional answer
    Input(Direction),
    /// Start from the menu; also skips the tutorial or restarts a finished run
    Start,
    /// Open the tutorial from the menu
    Tutorial,
    /// Leave the tutorial and start a run
    SkipTutorial,
    /// Start a new run after finishing
    Restart,
    /// Return to the menu
    Menu,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Directional inputs are spelled `inputUp`, `inputDown`, ...
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_optotype_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("inputUp"), Some(GameAction::Input(Direction::Up)));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "tutorial" => Some(GameAction::Tutorial),
            "skiptutorial" => Some(GameAction::SkipTutorial),
            "restart" => Some(GameAction::Restart),
            "menu" => Some(GameAction::Menu),
            "inputup" => Some(GameAction::Input(Direction::Up)),
            "inputdown" => Some(GameAction::Input(Direction::Down)),
            "inputleft" => Some(GameAction::Input(Direction::Left)),
            "inputright" => Some(GameAction::Input(Direction::Right)),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Tutorial => "tutorial",
            GameAction::SkipTutorial => "skipTutorial",
            GameAction::Restart => "restart",
            GameAction::Menu => "menu",
            GameAction::Input(Direction::Up) => "inputUp",
            GameAction::Input(Direction::Down) => "inputDown",
            GameAction::Input(Direction::Left) => "inputLeft",
            GameAction::Input(Direction::Right) => "inputRight",
        }
    }
}
