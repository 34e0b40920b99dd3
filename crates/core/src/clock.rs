//! Game clock - a phase-scoped one-second interval timer.
//!
//! The outer loop feeds elapsed milliseconds; the timer reports each time a
//! full interval has passed. A phase owns at most one timer: entering a phase
//! always drops the previous timer before arming a new one, so a stale timer
//! can never fire into the next phase.

use crate::types::GamePhase;

/// Repeating interval fed with elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl IntervalTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Milliseconds until the next fire.
    pub fn remaining_ms(&self) -> u32 {
        self.period_ms - self.elapsed_ms
    }

    /// Consume up to `budget_ms`.
    ///
    /// Returns `Some(consumed)` when the interval fires within the budget,
    /// `None` when the whole budget was absorbed without firing.
    pub fn step(&mut self, budget_ms: u32) -> Option<u32> {
        let remaining = self.remaining_ms();
        if budget_ms >= remaining {
            self.elapsed_ms = 0;
            Some(remaining)
        } else {
            self.elapsed_ms += budget_ms;
            None
        }
    }
}

/// Owner of the single active timer.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    period_ms: u32,
    active: Option<(GamePhase, IntervalTimer)>,
}

impl PhaseTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            active: None,
        }
    }

    /// Release the current timer and arm a fresh one if `phase` is timed.
    pub fn enter(&mut self, phase: GamePhase) {
        self.cancel();
        if phase.has_clock() {
            self.active = Some((phase, IntervalTimer::new(self.period_ms)));
        }
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Phase the running timer belongs to.
    pub fn owner(&self) -> Option<GamePhase> {
        self.active.map(|(phase, _)| phase)
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.active.map(|(_, timer)| timer.remaining_ms())
    }

    /// See [`IntervalTimer::step`]. Always `None` without a running timer.
    pub fn step(&mut self, budget_ms: u32) -> Option<u32> {
        let (_, timer) = self.active.as_mut()?;
        timer.step(budget_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut t = IntervalTimer::new(1000);
        assert_eq!(t.step(400), None);
        assert_eq!(t.step(500), None);
        assert_eq!(t.step(200), Some(100));
        assert_eq!(t.remaining_ms(), 1000);
    }

    #[test]
    fn test_interval_splits_large_budget() {
        let mut t = IntervalTimer::new(1000);
        let mut budget = 2500;
        let mut fired = 0;
        while let Some(used) = t.step(budget) {
            budget -= used;
            fired += 1;
        }
        assert_eq!(fired, 2);
        assert_eq!(t.remaining_ms(), 500);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut t = IntervalTimer::new(0);
        assert_eq!(t.step(0), None);
        assert_eq!(t.step(1), Some(1));
    }

    #[test]
    fn test_untimed_phases_have_no_timer() {
        let mut pt = PhaseTimer::new(1000);
        for phase in [GamePhase::Menu, GamePhase::Tutorial, GamePhase::Finished] {
            pt.enter(phase);
            assert!(!pt.is_running());
            assert_eq!(pt.step(5000), None);
        }
    }

    #[test]
    fn test_entering_a_phase_replaces_the_timer() {
        let mut pt = PhaseTimer::new(1000);
        pt.enter(GamePhase::Countdown);
        assert_eq!(pt.step(900), None);

        pt.enter(GamePhase::Playing);
        assert_eq!(pt.owner(), Some(GamePhase::Playing));
        // Fresh timer: the 900ms from the countdown timer are gone.
        assert_eq!(pt.remaining_ms(), Some(1000));
        assert_eq!(pt.step(100), None);
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut pt = PhaseTimer::new(1000);
        pt.enter(GamePhase::Playing);
        pt.cancel();
        assert!(!pt.is_running());
        assert_eq!(pt.owner(), None);
        assert_eq!(pt.step(10_000), None);
    }
}
