//! Game state module - the phase state machine
//!
//! This module ties together the sequence generator, the debounce gate, the
//! tutorial and the phase timer. It handles phase transitions, answer scoring
//! and clock ticks.

use arrayvec::ArrayVec;

use crate::clock::PhaseTimer;
use crate::config::GameConfig;
use crate::debounce::InputDebouncer;
use crate::events::{GameEvent, GameObserver, EVENT_CAPACITY};
use crate::rng::SimpleRng;
use crate::sequence::{generate_symbols, SymbolItem};
use crate::snapshot::GameSnapshot;
use crate::tutorial::{Tutorial, TutorialOutcome};
use crate::types::*;

/// Answer counters of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GameStats {
    pub correct: u32,
    pub errors: u32,
}

impl GameStats {
    /// Final score: correct minus errors (may be negative).
    pub fn score(&self) -> i64 {
        self.correct as i64 - self.errors as i64
    }

    pub fn attempts(&self) -> u32 {
        self.correct + self.errors
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    phase: GamePhase,
    symbols: Vec<SymbolItem>,
    current_index: u32,
    time_left: u32,
    stats: GameStats,
    tutorial: Tutorial,
    rng: SimpleRng,
    debouncer: InputDebouncer,
    timer: PhaseTimer,
    /// Monotonic run id (increments on every game start).
    episode_id: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new game in the menu with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            phase: GamePhase::Menu,
            symbols: Vec::new(),
            current_index: 0,
            time_left: 0,
            stats: GameStats::default(),
            tutorial: Tutorial::default(),
            rng: SimpleRng::new(seed),
            debouncer: InputDebouncer::new(config.debounce_ms),
            timer: PhaseTimer::new(CLOCK_INTERVAL_MS),
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn symbols(&self) -> &[SymbolItem] {
        &self.symbols
    }

    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// The symbol awaiting an answer, if any.
    pub fn current_symbol(&self) -> Option<&SymbolItem> {
        self.symbols.get(self.current_index as usize)
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn score(&self) -> i64 {
        self.stats.score()
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn clock_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            phase: self.phase,
            symbols: &self.symbols,
            current_index: self.current_index,
            time_left: self.time_left,
            stats: self.stats,
            tutorial: self.tutorial,
            episode_id: self.episode_id,
        }
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Drain pending events into every observer, in order.
    pub fn dispatch_events(&mut self, observers: &mut [&mut dyn GameObserver]) {
        for event in self.take_events() {
            for observer in observers.iter_mut() {
                observer.on_event(&event);
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    /// Single place where the phase changes; it also swaps the phase timer.
    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        self.phase = to;
        self.timer.enter(to);
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    /// Reset the run and enter the countdown.
    ///
    /// Shared by the menu, the tutorial (completed or skipped) and restart.
    pub fn start_game(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.symbols = generate_symbols(self.config.symbol_count, self.episode_id, &mut self.rng);
        if let Some(first) = self.symbols.first_mut() {
            first.status = SymbolStatus::Current;
        }
        self.current_index = 0;
        self.stats = GameStats::default();
        self.time_left = self.config.countdown_seconds;

        self.emit(GameEvent::GameStarted {
            episode_id: self.episode_id,
            symbol_count: self.config.symbol_count,
        });
        self.set_phase(GamePhase::Countdown);
        self.emit(GameEvent::CurrentIndexChanged { index: 0 });
    }

    pub fn open_tutorial(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.tutorial.reset(&mut self.rng);
        self.set_phase(GamePhase::Tutorial);
        true
    }

    pub fn skip_tutorial(&mut self) -> bool {
        if self.phase != GamePhase::Tutorial {
            return false;
        }
        self.start_game();
        true
    }

    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::Finished {
            return false;
        }
        self.start_game();
        true
    }

    /// Return to the menu from any other phase, abandoning a run in progress.
    pub fn go_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::Menu {
            return false;
        }
        self.set_phase(GamePhase::Menu);
        true
    }

    fn end_game(&mut self) {
        self.set_phase(GamePhase::Finished);
    }

    /// Apply a game action at time `now_ms` (monotonic milliseconds).
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Input(direction) => self.handle_input(direction, now_ms),
            GameAction::Start => match self.phase {
                GamePhase::Menu | GamePhase::Tutorial | GamePhase::Finished => {
                    self.start_game();
                    true
                }
                GamePhase::Countdown | GamePhase::Playing => false,
            },
            GameAction::Tutorial => self.open_tutorial(),
            GameAction::SkipTutorial => self.skip_tutorial(),
            GameAction::Restart => self.restart(),
            GameAction::Menu => self.go_to_menu(),
        }
    }

    /// Entry point for every directional answer, from keys or the control pad.
    ///
    /// Returns true if the answer changed state.
    pub fn handle_input(&mut self, input: Direction, now_ms: u64) -> bool {
        if !self.debouncer.try_accept(now_ms) {
            self.emit(GameEvent::InputDebounced { input });
            return false;
        }

        match self.phase {
            GamePhase::Tutorial => self.handle_tutorial_input(input),
            GamePhase::Playing => self.judge(input),
            _ => false,
        }
    }

    fn handle_tutorial_input(&mut self, input: Direction) -> bool {
        match self.tutorial.handle(input, &mut self.rng) {
            TutorialOutcome::Ignored => false,
            TutorialOutcome::Advanced => {
                self.emit(GameEvent::TutorialAdvanced {
                    step: self.tutorial.step(),
                    target: self.tutorial.target(),
                });
                true
            }
            TutorialOutcome::Completed => {
                self.start_game();
                true
            }
        }
    }

    fn judge(&mut self, input: Direction) -> bool {
        let index = self.current_index;
        let Some(current) = self.symbols.get_mut(index as usize) else {
            return false;
        };

        let expected = current.direction;
        let correct = expected == input;
        current.status = if correct {
            SymbolStatus::Correct
        } else {
            SymbolStatus::Wrong
        };
        if correct {
            self.stats.correct += 1;
        } else {
            self.stats.errors += 1;
        }
        self.emit(GameEvent::InputJudged {
            index,
            expected,
            input,
            correct,
        });

        let next = index + 1;
        self.current_index = next;
        match self.symbols.get_mut(next as usize) {
            Some(following) => {
                following.status = SymbolStatus::Current;
                self.emit(GameEvent::CurrentIndexChanged { index: next });
            }
            None => self.end_game(),
        }
        true
    }

    /// Advance the game clock by `elapsed_ms`.
    ///
    /// Returns true if at least one clock tick was handled.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut budget = elapsed_ms;
        let mut ticked = false;
        while let Some(used) = self.timer.step(budget) {
            budget -= used;
            ticked = true;
            self.on_clock_tick();
        }
        ticked
    }

    fn on_clock_tick(&mut self) {
        if self.timer.owner() != Some(self.phase) {
            self.timer.cancel();
            return;
        }

        match self.phase {
            GamePhase::Countdown => {
                if self.time_left <= 1 {
                    self.time_left = self.config.game_duration_seconds;
                    self.set_phase(GamePhase::Playing);
                } else {
                    self.time_left -= 1;
                }
            }
            GamePhase::Playing => {
                if self.time_left <= 1 {
                    self.time_left = 0;
                    self.end_game();
                } else {
                    self.time_left -= 1;
                }
            }
            GamePhase::Menu | GamePhase::Tutorial | GamePhase::Finished => {
                self.timer.cancel();
                return;
            }
        }
        self.emit(GameEvent::ClockTicked {
            phase: self.phase,
            time_left: self.time_left,
        });
    }

    /// Release the clock when the game is torn down mid-run.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
    }

    /// Replace the generated directions of the current run.
    #[cfg(test)]
    pub(crate) fn set_directions(&mut self, directions: &[Direction]) {
        self.symbols.truncate(directions.len());
        for (sym, dir) in self.symbols.iter_mut().zip(directions) {
            sym.direction = *dir;
        }
    }

    #[cfg(test)]
    pub(crate) fn force_tutorial_target(&mut self, target: Direction) {
        self.tutorial = Tutorial::new(target);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
