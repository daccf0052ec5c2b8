//! Counting runs of pieces and the open space beyond them along one direction

use crate::{board::Board, coord::Coord, Color, HEIGHT, WIDTH};

/// Cells already attributed to a connected group during one evaluation
#[derive(Clone, Debug, Default)]
pub struct Visited {
    cells: [[bool; WIDTH]; HEIGHT],
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, row: usize, col: usize) {
        self.cells[row][col] = true;
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }
}

/// The result of scanning away from a seed piece in one direction
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct LineSpan {
    /// Pieces of the seed's color directly following the seed
    pub connected: usize,
    /// Steps from the seed until the line is blocked: the connected pieces
    /// plus the empty cells continuing straight past them
    pub reach: usize,
}

/// Steps along `step` from `origin + count * step` while cells hold `color`,
/// marking each one visited. Returns `count` plus the number of cells walked.
fn extend<B: Board>(
    board: &B,
    origin: Coord,
    step: Coord,
    color: Color,
    visited: &mut Visited,
    mut count: usize,
) -> usize {
    let mut pos = origin + step * count as i32;
    while let Some((row, col)) = pos.index() {
        if board.cell(row, col) != color {
            break;
        }
        visited.mark(row, col);
        count += 1;
        pos = pos + step;
    }
    count
}

/// Scans from the cell after `seed` along `step` for pieces of `color`,
/// then for the empty cells beyond them.
pub fn scan<B: Board>(
    board: &B,
    seed: Coord,
    step: Coord,
    color: Color,
    visited: &mut Visited,
) -> LineSpan {
    let start = seed + step;
    let connected = extend(board, start, step, color, visited, 0);
    let reach = extend(board, start, step, Color::Empty, visited, connected);
    LineSpan { connected, reach }
}
