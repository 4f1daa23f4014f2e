//! Construction-time failures.
//!
//! Only board/round construction can fail. Bad selections during play are
//! ignored rather than reported (see [`crate::Round::handle_select`]).

use crate::types::Rgb;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigError {
    #[error("not enough colors: {pairs} pairs requested, palette has {available}")]
    NotEnoughColors { pairs: usize, available: usize },
    #[error("board needs an even number of cells, got {cells}")]
    OddCellCount { cells: usize },
    #[error("board has {cells} cells but {colors} colors were supplied")]
    ColorCountMismatch { cells: usize, colors: usize },
    #[error("color {color:?} does not appear exactly twice")]
    UnpairedColor { color: Rgb },
    #[error("{rows}x{cols} board does not fit a {side}x{side} grid")]
    GridMismatch { side: usize, rows: usize, cols: usize },
}
