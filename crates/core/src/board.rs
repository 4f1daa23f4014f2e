//! Board module - the grid of cards
//!
//! Cards are stored in a flat vector in row-major order, so a card's id is also
//! its index: `index = row * cols + col`.
//!
//! The pairing invariant (every color used appears on exactly two cards) is
//! established at construction and can never be broken afterwards: card colors
//! and positions are fixed, only card visibility state changes.

use std::collections::HashMap;

use crate::card::Card;
use crate::error::ConfigError;
use crate::rng::GameRng;
use crate::types::Rgb;

/// The card grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major (row * cols + col)
    cards: Vec<Card>,
}

impl Board {
    /// Deal a new board.
    ///
    /// Picks `rows * cols / 2` distinct colors from `palette`, doubles them,
    /// shuffles, and lays them out row by row.
    pub fn generate(
        rows: usize,
        cols: usize,
        palette: &[Rgb],
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let cells = rows * cols;
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { cells });
        }

        let pairs = cells / 2;
        let mut colors = rng
            .sample_distinct(palette, pairs)
            .ok_or(ConfigError::NotEnoughColors {
                pairs,
                available: palette.len(),
            })?;
        colors.extend_from_within(..);
        rng.shuffle(&mut colors);

        Ok(Self::layout(rows, cols, colors))
    }

    /// Build a board from an explicit row-major color list.
    ///
    /// Fails unless every color appears exactly twice.
    pub fn from_colors(rows: usize, cols: usize, colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        let cells = rows * cols;
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { cells });
        }
        if colors.len() != cells {
            return Err(ConfigError::ColorCountMismatch {
                cells,
                colors: colors.len(),
            });
        }

        let board = Self::layout(rows, cols, colors);
        if let Some((&color, _)) = board.color_counts().iter().find(|(_, &n)| n != 2) {
            return Err(ConfigError::UnpairedColor { color });
        }
        Ok(board)
    }

    fn layout(rows: usize, cols: usize, colors: Vec<Rgb>) -> Self {
        let cards = colors
            .into_iter()
            .enumerate()
            .map(|(id, color)| Card::new(id, color))
            .collect();
        Self { rows, cols, cards }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// (row, col) of a card index
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cards.len() || self.cols == 0 {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }

    /// Card index at (row, col)
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched())
    }

    /// How many cards carry each color
    pub fn color_counts(&self) -> HashMap<Rgb, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.color()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CLASSIC_PALETTE, EXTENDED_PALETTE};

    #[test]
    fn test_generate_4x4_pairs_every_color() {
        let mut rng = GameRng::new(12345);
        let board = Board::generate(4, 4, &CLASSIC_PALETTE, &mut rng).unwrap();

        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.len(), 16);

        let counts = board.color_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));
        assert!(counts.keys().all(|c| CLASSIC_PALETTE.contains(c)));
    }

    #[test]
    fn test_generate_8x8_uses_whole_extended_palette() {
        let mut rng = GameRng::new(1);
        let board = Board::generate(8, 8, &EXTENDED_PALETTE, &mut rng).unwrap();
        let counts = board.color_counts();
        assert_eq!(counts.len(), 32);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_generate_fails_without_enough_colors() {
        let mut rng = GameRng::new(1);
        let err = Board::generate(5, 8, &CLASSIC_PALETTE, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotEnoughColors {
                pairs: 20,
                available: 16
            }
        );

        let err = Board::generate(6, 6, &CLASSIC_PALETTE, &mut rng).unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughColors { pairs: 18, .. }));
    }

    #[test]
    fn test_generate_rejects_odd_cell_count() {
        let mut rng = GameRng::new(1);
        let err = Board::generate(3, 3, &CLASSIC_PALETTE, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::OddCellCount { cells: 9 });
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = Board::generate(4, 4, &CLASSIC_PALETTE, &mut GameRng::new(9)).unwrap();
        let b = Board::generate(4, 4, &CLASSIC_PALETTE, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cards_start_face_down_with_row_major_ids() {
        let board = Board::generate(4, 4, &CLASSIC_PALETTE, &mut GameRng::new(5)).unwrap();
        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.id(), i);
            assert!(card.is_clickable());
        }
        assert!(!board.all_matched());
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn test_position_and_index_of() {
        let board = Board::generate(4, 4, &CLASSIC_PALETTE, &mut GameRng::new(5)).unwrap();
        assert_eq!(board.position(0), Some((0, 0)));
        assert_eq!(board.position(5), Some((1, 1)));
        assert_eq!(board.position(15), Some((3, 3)));
        assert_eq!(board.position(16), None);

        assert_eq!(board.index_of(2, 3), Some(11));
        assert_eq!(board.index_of(4, 0), None);
        assert_eq!(board.index_of(0, 4), None);
    }

    #[test]
    fn test_from_colors_validates_pairs() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);

        let board = Board::from_colors(2, 2, vec![red, red, blue, blue]).unwrap();
        assert_eq!(board.card(1).map(|c| c.color()), Some(red));

        let err = Board::from_colors(2, 2, vec![red, red, red, blue]).unwrap_err();
        assert!(matches!(err, ConfigError::UnpairedColor { .. }));

        let err = Board::from_colors(2, 2, vec![red, red]).unwrap_err();
        assert_eq!(err, ConfigError::ColorCountMismatch { cells: 4, colors: 2 });
    }
}
