//! Symbol sequence generation.
//!
//! A run presents a fixed-length row of optotypes. Each one gets an
//! independently drawn direction and starts out `Pending`.

use std::fmt;

use crate::rng::SimpleRng;
use crate::types::{Direction, SymbolStatus};

/// Identifier of a symbol, unique within a run.
///
/// Displays as `sym-<episode>-<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId {
    pub episode: u32,
    pub index: u32,
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym-{}-{}", self.episode, self.index)
    }
}

/// One optotype in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolItem {
    pub id: SymbolId,
    pub direction: Direction,
    pub status: SymbolStatus,
}

impl SymbolItem {
    pub fn new(id: SymbolId, direction: Direction) -> Self {
        Self {
            id,
            direction,
            status: SymbolStatus::Pending,
        }
    }
}

/// Generate `count` pending symbols with uniformly random directions.
///
/// The caller marks the first element `Current` before play.
pub fn generate_symbols(count: u32, episode: u32, rng: &mut SimpleRng) -> Vec<SymbolItem> {
    (0..count)
        .map(|index| SymbolItem::new(SymbolId { episode, index }, rng.next_direction()))
        .collect()
}
