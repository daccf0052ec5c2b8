//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent explores the game tree to a fixed depth with alpha-beta
//! pruning and scores the leaves with a static evaluator that blends a
//! positional weight table with a scan of open lines.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::GridBoard, minimax::Minimax, SearchConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = GridBoard::new();
//! let mut bot = Minimax::new(SearchConfig::default().with_depth(1));
//! let selection = bot.select_move(&board)?;
//!
//! assert_eq!(selection.mv, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod coord;

pub mod error;

pub mod board;

pub mod weights;

pub mod scanner;

pub mod evaluator;

pub mod minimax;

pub mod tournament;

mod test;

pub use board::{Board, GridBoard, Move};
pub use error::{BoardError, SearchError};
pub use minimax::{Minimax, SearchConfig, Selection};
pub use weights::CoefficientPolicy;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the evaluator's weight tables are written out for a 6x7 grid
const_assert_eq!(WIDTH, 7);
const_assert_eq!(HEIGHT, 6);

/// The contents of a single cell, doubling as the evaluator's sign multiplier
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Empty,
    Positive,
    Negative,
}

impl Color {
    /// `+1` for the positive player, `-1` for the negative player, `0` for an empty cell
    pub fn sign(self) -> i32 {
        match self {
            Color::Empty => 0,
            Color::Positive => 1,
            Color::Negative => -1,
        }
    }

    /// The other player's color; empty stays empty
    pub fn opponent(self) -> Self {
        match self {
            Color::Empty => Color::Empty,
            Color::Positive => Color::Negative,
            Color::Negative => Color::Positive,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Empty
    }
}
