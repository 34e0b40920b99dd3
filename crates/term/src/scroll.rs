//! Auto-scroll for the symbol grid.
//!
//! Keeps the row holding the current symbol vertically centred. Driven by
//! state machine events through [`GameObserver`].

use crate::core::{GameEvent, GameObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollFollow {
    columns: u16,
    visible_rows: u16,
    symbol_count: u32,
    index: u32,
    top_row: u32,
}

impl ScrollFollow {
    pub fn new() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
            symbol_count: 0,
            index: 0,
            top_row: 0,
        }
    }

    /// First grid row to draw.
    pub fn top_row(&self) -> u32 {
        self.top_row
    }

    /// Update the grid geometry (e.g. after a terminal resize).
    pub fn set_layout(&mut self, columns: u16, visible_rows: u16) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.follow();
    }

    fn total_rows(&self) -> u32 {
        self.symbol_count.div_ceil(self.columns as u32)
    }

    fn follow(&mut self) {
        let row = self.index / self.columns as u32;
        let visible = self.visible_rows as u32;
        let max_top = self.total_rows().saturating_sub(visible);
        self.top_row = row.saturating_sub(visible / 2).min(max_top);
    }
}

impl Default for ScrollFollow {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for ScrollFollow {
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::GameStarted { symbol_count, .. } => {
                self.symbol_count = symbol_count;
                self.index = 0;
                self.follow();
            }
            GameEvent::CurrentIndexChanged { index } => {
                self.index = index;
                self.follow();
            }
            _ => {}
        }
    }
}
