//! Tutorial sub-flow: four forgiving practice answers before a run.

use crate::rng::SimpleRng;
use crate::types::{Direction, TUTORIAL_LAST_STEP};

/// Result of feeding one answer to the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialOutcome {
    /// Wrong direction; nothing changed.
    Ignored,
    /// Matched; moved to the next step with a fresh target.
    Advanced,
    /// Matched on the last step; the caller starts the game.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    step: u8,
    target: Direction,
}

impl Tutorial {
    pub fn new(target: Direction) -> Self {
        Self { step: 0, target }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn target(&self) -> Direction {
        self.target
    }

    /// Back to step 0 with a random target.
    pub fn reset(&mut self, rng: &mut SimpleRng) {
        self.step = 0;
        self.target = rng.next_direction();
    }

    pub fn handle(&mut self, input: Direction, rng: &mut SimpleRng) -> TutorialOutcome {
        if input != self.target {
            return TutorialOutcome::Ignored;
        }
        if self.step < TUTORIAL_LAST_STEP {
            self.step += 1;
            self.target = rng.next_direction();
            TutorialOutcome::Advanced
        } else {
            TutorialOutcome::Completed
        }
    }
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrong_for(dir: Direction) -> Direction {
        match dir {
            Direction::Up => Direction::Down,
            _ => Direction::Up,
        }
    }

    #[test]
    fn test_mismatch_is_ignored() {
        let mut rng = SimpleRng::new(1);
        let mut t = Tutorial::new(Direction::Right);
        for input in [Direction::Up, Direction::Left, Direction::Down] {
            assert_eq!(t.handle(input, &mut rng), TutorialOutcome::Ignored);
        }
        assert_eq!(t.step(), 0);
        assert_eq!(t.target(), Direction::Right);
    }

    #[test]
    fn test_four_matches_complete() {
        let mut rng = SimpleRng::new(3);
        let mut t = Tutorial::new(Direction::Right);

        for expected_step in 1..=3 {
            let target = t.target();
            assert_eq!(t.handle(target, &mut rng), TutorialOutcome::Advanced);
            assert_eq!(t.step(), expected_step);
        }
        let target = t.target();
        assert_eq!(t.handle(target, &mut rng), TutorialOutcome::Completed);
        assert_eq!(t.step(), 3);
    }

    #[test]
    fn test_mismatches_between_matches_do_not_count() {
        let mut rng = SimpleRng::new(11);
        let mut t = Tutorial::new(Direction::Right);

        assert_eq!(t.handle(Direction::Up, &mut rng), TutorialOutcome::Ignored);
        assert_eq!(t.handle(Direction::Right, &mut rng), TutorialOutcome::Advanced);
        let miss = wrong_for(t.target());
        assert_eq!(t.handle(miss, &mut rng), TutorialOutcome::Ignored);
        assert_eq!(t.step(), 1);
    }

    #[test]
    fn test_reset_returns_to_step_zero() {
        let mut rng = SimpleRng::new(8);
        let mut t = Tutorial::new(Direction::Left);
        t.handle(Direction::Left, &mut rng);
        assert_eq!(t.step(), 1);

        t.reset(&mut rng);
        assert_eq!(t.step(), 0);
    }
}
