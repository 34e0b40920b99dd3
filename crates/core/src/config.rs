use crate::types::{COUNTDOWN_SECONDS, GAME_DURATION_SECONDS, INPUT_DEBOUNCE_MS, SYMBOL_COUNT};

/// Tunables of a run. Defaults match the standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Sequence length N (must be at least 1).
    pub symbol_count: u32,
    pub countdown_seconds: u32,
    pub game_duration_seconds: u32,
    pub debounce_ms: u64,
}

impl GameConfig {
    /// Clamp values that would break the state machine's invariants.
    pub fn sanitized(self) -> Self {
        Self {
            symbol_count: self.symbol_count.max(1),
            countdown_seconds: self.countdown_seconds.max(1),
            game_duration_seconds: self.game_duration_seconds.max(1),
            debounce_ms: self.debounce_ms,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbol_count: SYMBOL_COUNT,
            countdown_seconds: COUNTDOWN_SECONDS,
            game_duration_seconds: GAME_DURATION_SECONDS,
            debounce_ms: INPUT_DEBOUNCE_MS,
        }
    }
}
