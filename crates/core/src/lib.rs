//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the memory game rules and round state machine.
//! It has **zero dependencies** on terminals, audio, or windowing, making it:
//!
//! - **Deterministic**: Same seed deals the same board
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//! - **Non-blocking**: Every call returns immediately; waits are countdowns
//!
//! # Module Structure
//!
//! - [`card`]: Single tile with a timed flip animation
//! - [`board`]: Square grid of cards; every color used exactly twice
//! - [`round`]: Selection, turn resolution, scoring, timing, completion
//! - [`rng`]: Seeded color sampling and shuffling
//! - [`scoring`]: Score and move totals
//! - [`events`]: Notification sinks (sound/logging hooks)
//! - [`config`]: Round construction parameters and environment loading
//! - [`snapshot`]: Read-only state for renderers
//!
//! # Game Rules
//!
//! - The board is dealt by sampling `cells / 2` palette colors without
//!   repetition, doubling them, and shuffling
//! - A turn is two selections; faces are compared only once both reveal
//!   animations have finished
//! - Match: both cards stay up, +10 points
//! - Mismatch: -1 point, both cards flip back after a 500ms pause
//! - Every resolved turn counts as one move
//! - The round is complete when every card is matched
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Round, RoundConfig};
//! use tui_memory_types::{GridSize, DisplayMode, TICK_MS};
//!
//! let config = RoundConfig::new(GridSize::Small, DisplayMode::Dark).with_seed(12345);
//! let mut round = Round::new(config).unwrap();
//!
//! assert!(round.handle_select(0));
//! assert!(round.handle_select(1));
//! assert!(!round.accepting_input());
//!
//! // Ten frames finish both reveal flips and resolve the turn.
//! for _ in 0..10 {
//!     round.advance(TICK_MS);
//! }
//! assert_eq!(round.moves(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`Round::advance`](round::Round::advance) every frame with the elapsed
//! milliseconds. With the default `TICK_MS` of 16ms a flip lasts 10 frames.

pub mod board;
pub mod card;
pub mod config;
pub mod error;
pub mod events;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use card::{Card, CardState, Face, FlipPhase};
pub use config::{Palette, RoundConfig};
pub use error::ConfigError;
pub use events::{EventLog, EventSink, NullSink};
pub use rng::GameRng;
pub use round::Round;
pub use scoring::ScoreBoard;
pub use snapshot::{CardSnapshot, RoundSnapshot};
