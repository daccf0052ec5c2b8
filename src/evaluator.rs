//! Static scoring of a leaf position from the positive player's point of view

use crate::{
    board::Board,
    coord::{Coord, AXES},
    error::SearchError,
    scanner::{scan, Visited},
    weights::{run_coefficient, CoefficientPolicy, POSITION_WEIGHTS},
    Color,
};

/// Score of a position where the side to move has already lost
pub const LOSS_SCORE: i32 = i32::MIN;
/// Score of a position where the side to move has already won
pub const WIN_SCORE: i32 = i32::MAX;

/// The number of steps an open line must span on both sides of its seed
/// for four in a row to still be reachable
const OPEN_REACH: usize = 3;

/// Scores `board` for a node where `maximizing` is the side to move.
///
/// A finished game is the worst possible outcome for the side to move, since
/// only the opponent's last piece could have ended it. A full board scores 0.
pub fn evaluate<B: Board>(
    board: &B,
    maximizing: bool,
    policy: CoefficientPolicy,
) -> Result<i32, SearchError> {
    if board.is_game_over() {
        return Ok(if maximizing { LOSS_SCORE } else { WIN_SCORE });
    }
    if board.legal_moves().is_empty() {
        return Ok(0);
    }
    Ok(positional_score(board) + connectivity_score(board, policy)?)
}

/// Sum of each piece's sign times the weight of its cell
pub fn positional_score<B: Board>(board: &B) -> i32 {
    let (rows, columns) = board.dimensions();
    let mut total = 0;
    for row in 0..rows {
        for col in 0..columns {
            total += board.cell(row, col).sign() * POSITION_WEIGHTS[row][col];
        }
    }
    total
}

/// Rewards groups of pieces that still have room to become four in a row
pub fn connectivity_score<B: Board>(
    board: &B,
    policy: CoefficientPolicy,
) -> Result<i32, SearchError> {
    let (rows, columns) = board.dimensions();
    let mut visited = Visited::new();
    let mut total = 0;
    for row in 0..rows {
        for col in 0..columns {
            if visited.is_marked(row, col) {
                continue;
            }
            let color = board.cell(row, col);
            if !color.is_empty() {
                total += group_strength(board, Coord::from((row, col)), color, &mut visited, policy)?;
            }
            visited.mark(row, col);
        }
    }
    Ok(total)
}

fn group_strength<B: Board>(
    board: &B,
    seed: Coord,
    color: Color,
    visited: &mut Visited,
    policy: CoefficientPolicy,
) -> Result<i32, SearchError> {
    let mut strength = 0;
    for &axis in AXES.iter() {
        let forward = scan(board, seed, axis, color, visited);
        let backward = scan(board, seed, -axis, color, visited);

        if forward.reach + backward.reach >= OPEN_REACH {
            let coefficient = run_coefficient(forward.connected + backward.connected, policy)?;
            strength += color.sign() * coefficient;
        }
    }
    Ok(strength)
}
