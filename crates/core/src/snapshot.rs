//! Read-only view of a round for renderers.
//!
//! Renderers never touch `Round` internals; they read a `RoundSnapshot`. The
//! snapshot is `Hash` so a frame loop can fingerprint it and skip redraws.

use serde::Serialize;

use crate::card::{CardState, Face};
use crate::types::{DisplayMode, GridSize, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CardSnapshot {
    pub id: usize,
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
    pub state: CardState,
    /// Side to draw this frame
    pub shown: Face,
    /// Drawn width in thousandths of full width (flip animation)
    pub width_permille: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoundSnapshot {
    pub round_id: u32,
    pub seed: Option<u64>,
    pub grid: GridSize,
    pub mode: DisplayMode,
    pub rows: usize,
    pub cols: usize,
    pub cards: Vec<CardSnapshot>,
    pub pending: [Option<usize>; 2],
    pub score: i32,
    pub moves: u32,
    pub matches: u32,
    pub mismatches: u32,
    pub accuracy_pct: u8,
    pub elapsed_ms: u64,
    pub accepting_input: bool,
    pub complete: bool,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.round_id = 0;
        self.seed = None;
        self.grid = GridSize::default();
        self.mode = DisplayMode::default();
        self.rows = 0;
        self.cols = 0;
        self.cards.clear();
        self.pending = [None, None];
        self.score = 0;
        self.moves = 0;
        self.matches = 0;
        self.mismatches = 0;
        self.accuracy_pct = 0;
        self.elapsed_ms = 0;
        self.accepting_input = true;
        self.complete = false;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    /// True while any card is mid-flip (frames differ even without input)
    pub fn animating(&self) -> bool {
        self.cards
            .iter()
            .any(|c| matches!(c.state, CardState::Flipping { .. }))
    }

    pub fn card_at(&self, row: usize, col: usize) -> Option<&CardSnapshot> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cards.get(row * self.cols + col)
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        let mut s = Self {
            round_id: 0,
            seed: None,
            grid: GridSize::default(),
            mode: DisplayMode::default(),
            rows: 0,
            cols: 0,
            cards: Vec::new(),
            pending: [None, None],
            score: 0,
            moves: 0,
            matches: 0,
            mismatches: 0,
            accuracy_pct: 0,
            elapsed_ms: 0,
            accepting_input: true,
            complete: false,
        };
        s.clear();
        s
    }
}
