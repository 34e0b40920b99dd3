//! Events emitted by the state machine and the observer hook that consumes them.
//!
//! Presentation side effects (auto-scroll) and logging hang off these events
//! instead of being called from inside the state machine.

use crate::types::{Direction, GamePhase};

/// Capacity of the pending event buffer. Overflowing events are dropped.
pub const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
    /// A fresh sequence was generated.
    GameStarted {
        episode_id: u32,
        symbol_count: u32,
    },
    InputJudged {
        index: u32,
        expected: Direction,
        input: Direction,
        correct: bool,
    },
    CurrentIndexChanged {
        index: u32,
    },
    ClockTicked {
        phase: GamePhase,
        time_left: u32,
    },
    TutorialAdvanced {
        step: u8,
        target: Direction,
    },
    /// Input dropped by the debounce gate.
    InputDebounced {
        input: Direction,
    },
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PhaseChanged { .. } => "phase_changed",
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::InputJudged { .. } => "input_judged",
            GameEvent::CurrentIndexChanged { .. } => "current_index_changed",
            GameEvent::ClockTicked { .. } => "clock_ticked",
            GameEvent::TutorialAdvanced { .. } => "tutorial_advanced",
            GameEvent::InputDebounced { .. } => "input_debounced",
        }
    }
}

/// Receives state machine events after the fact.
///
/// Observers cannot fail the state machine; whatever they do with an event
/// stays on their side.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}
