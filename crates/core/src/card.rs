//! Card module - a single tile and its flip animation
//!
//! A card moves through a small state machine:
//!
//! ```text
//! FaceDown --flip--> Flipping{to: Up} --advance..--> FaceUp
//! FaceUp   --set_matched--> Matched
//! FaceUp   --flip--> Flipping{to: Down} --advance..--> FaceDown
//! ```
//!
//! Flip progress is measured in milliseconds, not frames, so callers can drive it
//! from fixed ticks or from wall-clock deltas. A flip has two halves: during the
//! first half the side being turned away is shown (shrinking), during the second
//! half the new side is shown (growing). Only the discrete states matter for game
//! logic; the halves are a rendering concern.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Which side of a card faces the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Down,
    Up,
}

impl Face {
    pub fn opposite(&self) -> Self {
        match self {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
        }
    }
}

/// Visibility state of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardState {
    FaceDown,
    /// Mid-animation toward `to`; `progress_ms` counts up to the flip duration.
    Flipping { to: Face, progress_ms: u32 },
    FaceUp,
    /// Terminal: part of a found pair.
    Matched,
}

/// Half of a flip animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipPhase {
    /// Old side visible, narrowing to zero width
    First,
    /// New side visible, widening back to full width
    Second,
}

/// A single tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: usize,
    color: Rgb,
    state: CardState,
}

impl Card {
    /// Create a face-down card
    pub fn new(id: usize, color: Rgb) -> Self {
        Self {
            id,
            color,
            state: CardState::FaceDown,
        }
    }

    /// Board index of this card
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Only face-down cards accept a selection
    pub fn is_clickable(&self) -> bool {
        self.state == CardState::FaceDown
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, CardState::Flipping { .. })
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Face-up or matched, with no animation running
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, CardState::FaceUp | CardState::Matched)
    }

    /// Color usable for pair comparison.
    ///
    /// `None` until the reveal animation has fully completed.
    pub fn revealed_color(&self) -> Option<Rgb> {
        self.is_revealed().then_some(self.color)
    }

    /// Start a flip toward the other side.
    ///
    /// Returns false (and changes nothing) while already flipping or once matched.
    pub fn flip(&mut self) -> bool {
        let to = match self.state {
            CardState::FaceDown => Face::Up,
            CardState::FaceUp => Face::Down,
            CardState::Flipping { .. } | CardState::Matched => return false,
        };
        self.state = CardState::Flipping { to, progress_ms: 0 };
        true
    }

    /// Advance a running flip by `elapsed_ms`.
    ///
    /// Returns true when the flip completed during this call.
    pub fn advance(&mut self, elapsed_ms: u32, flip_ms: u32) -> bool {
        let CardState::Flipping { to, progress_ms } = self.state else {
            return false;
        };

        let progress_ms = progress_ms.saturating_add(elapsed_ms);
        if progress_ms >= flip_ms {
            self.state = match to {
                Face::Up => CardState::FaceUp,
                Face::Down => CardState::FaceDown,
            };
            true
        } else {
            self.state = CardState::Flipping { to, progress_ms };
            false
        }
    }

    /// Lock a face-up card as part of a pair.
    pub fn set_matched(&mut self) -> bool {
        if self.state != CardState::FaceUp {
            return false;
        }
        self.state = CardState::Matched;
        true
    }

    /// Current animation half, if flipping
    pub fn phase(&self, flip_ms: u32) -> Option<FlipPhase> {
        let CardState::Flipping { progress_ms, .. } = self.state else {
            return None;
        };
        if progress_ms.saturating_mul(2) < flip_ms {
            Some(FlipPhase::First)
        } else {
            Some(FlipPhase::Second)
        }
    }

    /// Side that should be drawn right now
    pub fn shown_face(&self, flip_ms: u32) -> Face {
        match self.state {
            CardState::FaceDown => Face::Down,
            CardState::FaceUp | CardState::Matched => Face::Up,
            CardState::Flipping { to, .. } => match self.phase(flip_ms) {
                Some(FlipPhase::First) => to.opposite(),
                _ => to,
            },
        }
    }

    /// Drawn width as a fraction of full width (1.0 when not flipping)
    pub fn width_fraction(&self, flip_ms: u32) -> f32 {
        let CardState::Flipping { progress_ms, .. } = self.state else {
            return 1.0;
        };
        if flip_ms == 0 {
            return 1.0;
        }
        let p = (progress_ms as f32 / flip_ms as f32).clamp(0.0, 1.0);
        if p < 0.5 {
            1.0 - p * 2.0
        } else {
            (p - 0.5) * 2.0
        }
    }
}
