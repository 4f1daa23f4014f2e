//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic attached, making them usable in
//! any context (round engine, terminal rendering, input mapping).
//!
//! # Grid Sizes
//!
//! Boards are always square. Three sizes are offered:
//!
//! | Size | Side | Cards | Pairs |
//! |------|------|-------|-------|
//! | `Small` (easy) | 4 | 16 | 8 |
//! | `Medium` | 6 | 36 | 18 |
//! | `Large` (hard) | 8 | 64 | 32 |
//!
//! # Palettes
//!
//! - [`CLASSIC_PALETTE`]: 16 colors, enough for a 4x4 board only
//! - [`EXTENDED_PALETTE`]: the classic 16 followed by 16 more, enough for 8x8
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `FLIP_MS` | 160 | Duration of one card flip (10 ticks) |
//! | `MISMATCH_DELAY_MS` | 500 | Cards stay visible after a failed pair |
//!
//! # Scoring Constants
//!
//! - `MATCH_POINTS`: 10 points per matched pair
//! - `MISMATCH_PENALTY`: 1 point lost per failed pair
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{DisplayMode, GridSize, PlayAction, CLASSIC_PALETTE};
//!
//! let grid = GridSize::from_str("easy").unwrap();
//! assert_eq!(grid, GridSize::Small);
//! assert_eq!(grid.cells(), 16);
//! assert_eq!(grid.pairs(), 8);
//!
//! assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
//! assert_eq!(PlayAction::from_str("restart"), Some(PlayAction::Restart));
//! assert_eq!(CLASSIC_PALETTE.len(), 16);
//! ```

use serde::{Deserialize, Serialize};

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of a single card flip in milliseconds.
///
/// Ten frames at 60 FPS.
pub const FLIP_MS: u32 = 160;

/// How long a mismatched pair stays face-up before flipping back.
pub const MISMATCH_DELAY_MS: u32 = 500;

/// Points awarded for a matched pair.
pub const MATCH_POINTS: i32 = 10;

/// Points removed for a mismatched pair.
pub const MISMATCH_PENALTY: i32 = 1;

/// Color of a face-down card.
pub const CARD_BACK: Rgb = Rgb::new(200, 200, 200);


/// 24-bit RGB color.
///
/// Card faces are compared by color equality, so this doubles as the pair key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness (0-255), used to pick readable text over a color.
    pub fn luma(&self) -> u8 {
        let l = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        (l / 1000) as u8
    }
}

/// The sixteen card colors of the classic game.
pub const CLASSIC_PALETTE: [Rgb; 16] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 128, 0),
    Rgb::new(128, 0, 255),
    Rgb::new(0, 128, 255),
    Rgb::new(128, 255, 0),
    Rgb::new(255, 0, 128),
    Rgb::new(0, 255, 128),
    Rgb::new(128, 128, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(192, 192, 192),
];

/// Classic palette plus sixteen more colors, enough pairs for an 8x8 board.
pub const EXTENDED_PALETTE: [Rgb; 32] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 128, 0),
    Rgb::new(128, 0, 255),
    Rgb::new(0, 128, 255),
    Rgb::new(128, 255, 0),
    Rgb::new(255, 0, 128),
    Rgb::new(0, 255, 128),
    Rgb::new(128, 128, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(128, 0, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(255, 192, 203),
    Rgb::new(255, 215, 0),
    Rgb::new(64, 224, 208),
    Rgb::new(139, 69, 19),
    Rgb::new(75, 0, 130),
    Rgb::new(255, 99, 71),
    Rgb::new(46, 139, 87),
    Rgb::new(70, 130, 180),
    Rgb::new(238, 130, 238),
    Rgb::new(210, 180, 140),
    Rgb::new(96, 96, 96),
    Rgb::new(255, 160, 122),
    Rgb::new(0, 100, 0),
];

/// Square board sizes offered by the game
///
/// The discriminant is the side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridSize {
    #[default]
    Small = 4,
    Medium = 6,
    Large = 8,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Small, GridSize::Medium, GridSize::Large];

    /// Number of rows (and columns)
    pub fn side(&self) -> usize {
        *self as usize
    }

    /// Total number of cards on the board
    pub fn cells(&self) -> usize {
        self.side() * self.side()
    }

    /// Number of distinct colors needed
    pub fn pairs(&self) -> usize {
        self.cells() / 2
    }

    pub fn from_side(side: u8) -> Option<Self> {
        match side {
            4 => Some(GridSize::Small),
            6 => Some(GridSize::Medium),
            8 => Some(GridSize::Large),
            _ => None,
        }
    }

    /// Parse a grid size from a side length or a difficulty name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GridSize;
    ///
    /// assert_eq!(GridSize::from_str("4"), Some(GridSize::Small));
    /// assert_eq!(GridSize::from_str("Medium"), Some(GridSize::Medium));
    /// assert_eq!(GridSize::from_str("hard"), Some(GridSize::Large));
    /// assert_eq!(GridSize::from_str("huge"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "4" | "4x4" | "easy" | "small" => Some(GridSize::Small),
            "6" | "6x6" | "medium" => Some(GridSize::Medium),
            "8" | "8x8" | "hard" | "large" => Some(GridSize::Large),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            GridSize::Small => "Easy (4x4)",
            GridSize::Medium => "Medium (6x6)",
            GridSize::Large => "Hard (8x8)",
        }
    }
}

/// Display preference chosen on the menu.
///
/// The round engine carries it around untouched; only renderers look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    pub fn toggled(&self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Background color for this mode
    pub fn background(&self) -> Rgb {
        match self {
            DisplayMode::Light => Rgb::new(255, 255, 255),
            DisplayMode::Dark => Rgb::new(0, 0, 0),
        }
    }

    /// Text color for this mode
    pub fn text(&self) -> Rgb {
        match self {
            DisplayMode::Light => Rgb::new(0, 0, 0),
            DisplayMode::Dark => Rgb::new(255, 255, 255),
        }
    }
}

/// Actions the presentation layer can apply to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    /// Reveal the card at this board index
    Select(usize),
    /// Start a fresh round with the same grid size and display mode
    Restart,
    /// Leave the round
    Quit,
}

impl PlayAction {
    /// Parse a non-indexed action from string
    ///
    /// `Select` carries a card index and is never produced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::PlayAction;
    ///
    /// assert_eq!(PlayAction::from_str("Restart"), Some(PlayAction::Restart));
    /// assert_eq!(PlayAction::from_str("quit"), Some(PlayAction::Quit));
    /// assert_eq!(PlayAction::from_str("select"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(PlayAction::Restart),
            "quit" => Some(PlayAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayAction::Select(_) => "select",
            PlayAction::Restart => "restart",
            PlayAction::Quit => "quit",
        }
    }
}

/// Notification emitted by a round.
///
/// Listeners (sound, logging) are optional; whether anyone consumes these
/// never changes game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    /// A card started its reveal flip
    Flip { index: usize },
    /// Two revealed cards share a color
    Match { first: usize, second: usize },
    /// Two revealed cards differ
    Mismatch { first: usize, second: usize },
    /// Every card is matched
    Complete,
}

impl RoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundEvent::Flip { .. } => "flip",
            RoundEvent::Match { .. } => "match",
            RoundEvent::Mismatch { .. } => "mismatch",
            RoundEvent::Complete => "complete",
        }
    }
}
