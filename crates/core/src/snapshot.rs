use crate::game_state::GameStats;
use crate::sequence::SymbolItem;
use crate::tutorial::Tutorial;
use crate::types::GamePhase;

/// Read-only view of the game handed to renderers each frame.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub phase: GamePhase,
    pub symbols: &'a [SymbolItem],
    pub current_index: u32,
    pub time_left: u32,
    pub stats: GameStats,
    pub tutorial: Tutorial,
    pub episode_id: u32,
}

impl<'a> GameSnapshot<'a> {
    pub fn current_symbol(&self) -> Option<&'a SymbolItem> {
        self.symbols.get(self.current_index as usize)
    }

    /// True once every symbol has been answered.
    pub fn sequence_exhausted(&self) -> bool {
        !self.symbols.is_empty() && self.current_index as usize >= self.symbols.len()
    }

    /// Cheap fingerprint for render throttling.
    ///
    /// Covers everything a frame shows except the symbol statuses, which only
    /// change together with `current_index`.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        };
        mix(self.phase as u64);
        mix(self.current_index as u64);
        mix(self.time_left as u64);
        mix(self.stats.correct as u64);
        mix(self.stats.errors as u64);
        mix(self.tutorial.step() as u64);
        mix(self.tutorial.target() as u64);
        mix(self.episode_id as u64);
        h
    }
}
