//! Round configuration
//!
//! Everything a [`Round`](crate::Round) needs at construction time. The display
//! mode is carried through untouched so that restarting a round keeps it.
//!
//! # Environment Variables
//!
//! - `MEMORY_GRID`: `4`/`6`/`8` or `easy`/`medium`/`hard` (default: 4)
//! - `MEMORY_MODE`: `light` or `dark` (default: dark)
//! - `MEMORY_SEED`: u64 seed for a reproducible deal (default: random)
//! - `MEMORY_PALETTE`: `classic` (16 colors) or `extended` (32 colors, default)
//! - `MEMORY_FLIP_MS`: flip animation duration (default: 160)
//! - `MEMORY_MISMATCH_DELAY_MS`: pause before a failed pair flips back (default: 500)
//!
//! Values that fail to parse fall back to the default.

use crate::types::{
    DisplayMode, GridSize, Rgb, CLASSIC_PALETTE, EXTENDED_PALETTE, FLIP_MS, MISMATCH_DELAY_MS,
};

/// Set of colors a board is dealt from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Palette {
    Classic,
    #[default]
    Extended,
    Custom(Vec<Rgb>),
}

impl Palette {
    pub fn colors(&self) -> &[Rgb] {
        match self {
            Palette::Classic => &CLASSIC_PALETTE,
            Palette::Extended => &EXTENDED_PALETTE,
            Palette::Custom(colors) => colors,
        }
    }

    pub fn len(&self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Palette::Classic),
            "extended" => Some(Palette::Extended),
            _ => None,
        }
    }
}

/// Round construction parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub grid: GridSize,
    pub mode: DisplayMode,
    /// Fixed deal seed; `None` picks a fresh one per round.
    pub seed: Option<u64>,
    pub palette: Palette,
    pub flip_ms: u32,
    pub mismatch_delay_ms: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            mode: DisplayMode::default(),
            seed: None,
            palette: Palette::default(),
            flip_ms: FLIP_MS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
        }
    }
}

impl RoundConfig {
    pub fn new(grid: GridSize, mode: DisplayMode) -> Self {
        Self {
            grid,
            mode,
            ..Self::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let grid = lookup("MEMORY_GRID")
            .and_then(|s| GridSize::from_str(&s))
            .unwrap_or(defaults.grid);
        let mode = lookup("MEMORY_MODE")
            .and_then(|s| DisplayMode::from_str(&s))
            .unwrap_or(defaults.mode);
        let seed = lookup("MEMORY_SEED").and_then(|s| s.trim().parse().ok());
        let palette = lookup("MEMORY_PALETTE")
            .and_then(|s| Palette::from_str(&s))
            .unwrap_or(defaults.palette);
        let flip_ms = lookup("MEMORY_FLIP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.flip_ms);
        let mismatch_delay_ms = lookup("MEMORY_MISMATCH_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.mismatch_delay_ms);

        Self {
            grid,
            mode,
            seed,
            palette,
            flip_ms,
            mismatch_delay_ms,
        }
    }

    pub fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_flip_ms(mut self, flip_ms: u32) -> Self {
        self.flip_ms = flip_ms;
        self
    }

    pub fn with_mismatch_delay_ms(mut self, delay_ms: u32) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }
}
