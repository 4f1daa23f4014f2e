//! Round module - the turn engine
//!
//! A round owns the board and runs the selection/resolution protocol:
//!
//! 1. `handle_select` starts a card's reveal flip. The first selection is held
//!    as pending; the second one closes input.
//! 2. `advance` ticks every flip. Once both pending cards have finished their
//!    reveal, the turn resolves: a pair is matched (+10), a mismatch costs a
//!    point and both cards flip back after a short delay.
//! 3. When every card is matched the round is complete.
//!
//! The mismatch delay is a countdown consumed by `advance`, never a sleep, so
//! the frame loop keeps running while the failed pair is on display.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::card::{Card, CardState};
use crate::config::RoundConfig;
use crate::error::ConfigError;
use crate::events::{EventSink, NullSink};
use crate::rng::GameRng;
use crate::scoring::ScoreBoard;
use crate::snapshot::{CardSnapshot, RoundSnapshot};
use crate::types::{DisplayMode, GridSize, PlayAction, RoundEvent};

/// One play-through of a board
pub struct Round {
    config: RoundConfig,
    board: Board,
    /// Cards selected this turn, in click order.
    pending: ArrayVec<usize, 2>,
    /// Mismatched pair on its way back to face-down.
    returning: ArrayVec<usize, 2>,
    /// Delay left before `returning` starts flipping back.
    flip_back_in_ms: Option<u32>,
    accepting_input: bool,
    scores: ScoreBoard,
    elapsed_ms: u64,
    complete: bool,
    /// Monotonic round id (increments on restart).
    round_id: u32,
    /// `None` for boards dealt outside the round with no configured seed
    seed: Option<u64>,
    sink: Box<dyn EventSink>,
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("pending", &self.pending)
            .field("returning", &self.returning)
            .field("flip_back_in_ms", &self.flip_back_in_ms)
            .field("accepting_input", &self.accepting_input)
            .field("scores", &self.scores)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("complete", &self.complete)
            .field("round_id", &self.round_id)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Round {
    /// Deal a new round.
    ///
    /// Fails when the palette cannot supply a color per pair.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        let side = config.grid.side();
        Self::deal(config, side, side, Box::new(NullSink))
    }

    /// Deal a new round that reports events to `sink`.
    pub fn with_sink(
        config: RoundConfig,
        sink: impl EventSink + 'static,
    ) -> Result<Self, ConfigError> {
        let side = config.grid.side();
        Self::deal(config, side, side, Box::new(sink))
    }

    /// Start a round on a board that was already dealt.
    ///
    /// The board must be square with the side of `config.grid`.
    pub fn from_board(config: RoundConfig, board: Board) -> Result<Self, ConfigError> {
        let side = config.grid.side();
        if board.rows() != side || board.cols() != side {
            return Err(ConfigError::GridMismatch {
                side,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        let seed = config.seed;
        Ok(Self::assemble(config, board, seed, Box::new(NullSink)))
    }

    fn deal(
        config: RoundConfig,
        rows: usize,
        cols: usize,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, ConfigError> {
        let mut rng = Self::rng_for(&config);
        let board = Self::deal_board(&config, rows, cols, &mut rng)?;
        Ok(Self::assemble(config, board, Some(rng.seed()), sink))
    }

    fn rng_for(config: &RoundConfig) -> GameRng {
        match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::random(),
        }
    }

    fn deal_board(
        config: &RoundConfig,
        rows: usize,
        cols: usize,
        rng: &mut GameRng,
    ) -> Result<Board, ConfigError> {
        let board = Board::generate(rows, cols, config.palette.colors(), rng).map_err(|e| {
            log::warn!("cannot deal {}x{} board: {}", rows, cols, e);
            e
        })?;
        log::info!(
            "round dealt: {}x{} mode={} seed={}",
            rows,
            cols,
            config.mode.as_str(),
            rng.seed()
        );
        Ok(board)
    }

    fn assemble(
        config: RoundConfig,
        board: Board,
        seed: Option<u64>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            board,
            pending: ArrayVec::new(),
            returning: ArrayVec::new(),
            flip_back_in_ms: None,
            accepting_input: true,
            scores: ScoreBoard::default(),
            elapsed_ms: 0,
            complete: false,
            round_id: 0,
            seed,
            sink,
        }
    }

    /// Replace the event sink.
    pub fn set_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Deal a fresh board with the same size, mode, palette and timing.
    ///
    /// A fixed seed deals the same board again. The event sink is kept.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let mut rng = Self::rng_for(&self.config);
        let board = Self::deal_board(&self.config, self.board.rows(), self.board.cols(), &mut rng)?;

        let round_id = self.round_id.wrapping_add(1);
        let sink = std::mem::replace(&mut self.sink, Box::new(NullSink));
        *self = Self::assemble(self.config.clone(), board, Some(rng.seed()), sink);
        self.round_id = round_id;
        Ok(())
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    pub fn mode(&self) -> DisplayMode {
        self.config.mode
    }

    pub fn score(&self) -> i32 {
        self.scores.score
    }

    pub fn moves(&self) -> u32 {
        self.scores.moves
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    /// Selections of the current turn, first pick first
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// True between a mismatch and both cards being face-down again
    pub fn flipping_back(&self) -> bool {
        !self.returning.is_empty()
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    /// Seed the board was dealt from, if known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Unmatched cards that are face-up or mid-flip
    pub fn in_flight_count(&self) -> usize {
        self.board
            .cards()
            .iter()
            .filter(|c| c.is_flipping() || c.state() == CardState::FaceUp)
            .count()
    }

    /// Select the card at `index`.
    ///
    /// Returns false without changing anything when input is closed, the round
    /// is over, the index is off the board, or the card is not face-down.
    pub fn handle_select(&mut self, index: usize) -> bool {
        if !self.accepting_input || self.complete || self.pending.is_full() {
            return false;
        }
        let Some(card) = self.board.card_mut(index) else {
            return false;
        };
        if !card.is_clickable() {
            return false;
        }

        card.flip();
        self.pending.push(index);
        if self.pending.is_full() {
            self.accepting_input = false;
        }

        log::debug!("select {} (pending {:?})", index, self.pending.as_slice());
        self.sink.notify(RoundEvent::Flip { index });
        true
    }

    /// Apply a presentation-layer action.
    pub fn apply_action(&mut self, action: PlayAction) -> bool {
        match action {
            PlayAction::Select(index) => self.handle_select(index),
            PlayAction::Restart => self.restart().is_ok(),
            // Leaving a round is the caller's business; the round just gets dropped.
            PlayAction::Quit => false,
        }
    }

    /// Per-frame update.
    ///
    /// Ticks flip animations, resolves a finished turn, runs the mismatch
    /// delay, and detects completion.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.complete {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);

        let flip_ms = self.config.flip_ms;
        for card in self.board.cards_mut() {
            card.advance(elapsed_ms, flip_ms);
        }

        self.tick_flip_back(elapsed_ms);

        if self.pending.is_full() {
            self.resolve_turn();
        }

        if self.board.all_matched() {
            self.complete = true;
            log::info!(
                "round complete: score={} moves={} time={}s",
                self.scores.score,
                self.scores.moves,
                self.elapsed_secs()
            );
            self.sink.notify(RoundEvent::Complete);
        }
    }

    fn resolve_turn(&mut self) {
        let (first, second) = (self.pending[0], self.pending[1]);
        let a = self.board.card(first).and_then(Card::revealed_color);
        let b = self.board.card(second).and_then(Card::revealed_color);
        // Faces are not comparable until both reveals have finished.
        let (Some(a), Some(b)) = (a, b) else {
            return;
        };
        self.pending.clear();

        if a == b {
            for index in [first, second] {
                if let Some(card) = self.board.card_mut(index) {
                    card.set_matched();
                }
            }
            self.scores.record_match();
            self.accepting_input = true;
            log::debug!("match {} {} score={}", first, second, self.scores.score);
            self.sink.notify(RoundEvent::Match { first, second });
        } else {
            self.scores.record_mismatch();
            self.returning.push(first);
            self.returning.push(second);
            log::debug!("mismatch {} {} score={}", first, second, self.scores.score);
            self.sink.notify(RoundEvent::Mismatch { first, second });

            if self.config.mismatch_delay_ms == 0 {
                self.start_flip_back();
            } else {
                self.flip_back_in_ms = Some(self.config.mismatch_delay_ms);
            }
        }
    }

    fn tick_flip_back(&mut self, elapsed_ms: u32) {
        if self.returning.is_empty() {
            return;
        }

        match self.flip_back_in_ms {
            Some(remaining) => {
                let remaining = remaining.saturating_sub(elapsed_ms);
                if remaining == 0 {
                    self.start_flip_back();
                } else {
                    self.flip_back_in_ms = Some(remaining);
                }
            }
            None => {
                let settled = self
                    .returning
                    .iter()
                    .all(|&i| self.board.card(i).is_some_and(Card::is_clickable));
                if settled {
                    self.returning.clear();
                    self.accepting_input = true;
                }
            }
        }
    }

    fn start_flip_back(&mut self) {
        self.flip_back_in_ms = None;
        for &index in &self.returning {
            if let Some(card) = self.board.card_mut(index) {
                card.flip();
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        let flip_ms = self.config.flip_ms;
        let cols = self.board.cols().max(1);

        out.cards.clear();
        out.cards.extend(self.board.cards().iter().map(|card| CardSnapshot {
            id: card.id(),
            row: card.id() / cols,
            col: card.id() % cols,
            color: card.color(),
            state: card.state(),
            shown: card.shown_face(flip_ms),
            width_permille: (card.width_fraction(flip_ms) * 1000.0).round() as u16,
        }));

        out.round_id = self.round_id;
        out.seed = self.seed;
        out.grid = self.config.grid;
        out.mode = self.config.mode;
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.pending = [self.pending.first().copied(), self.pending.get(1).copied()];
        out.score = self.scores.score;
        out.moves = self.scores.moves;
        out.matches = self.scores.matches;
        out.mismatches = self.scores.mismatches;
        out.accuracy_pct = self.scores.accuracy_pct();
        out.elapsed_ms = self.elapsed_ms;
        out.accepting_input = self.accepting_input;
        out.complete = self.complete;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
