//! A fixed-depth minimax agent with alpha-beta pruning

use log::{debug, info};

use crate::{
    board::{Board, Move},
    error::SearchError,
    evaluator::evaluate,
    weights::CoefficientPolicy,
    Color,
};

/// Search settings for a [`Minimax`] agent
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the current position, including the move being chosen
    pub depth: u32,
    pub coefficient_policy: CoefficientPolicy,
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_coefficient_policy(mut self, policy: CoefficientPolicy) -> Self {
        self.coefficient_policy = policy;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            coefficient_policy: CoefficientPolicy::default(),
        }
    }
}

/// The outcome of one move decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The chosen move
    pub mv: Move,
    /// The search value of the chosen move
    pub value: i32,
    /// Leaf evaluations performed while deciding
    pub leaf_count: usize,
    /// Every candidate with its search value, in the order the board listed them
    pub scores: Vec<(Move, i32)>,
}

/// A depth-limited minimax agent
///
/// # Notes
/// The agent always plays as [`Color::Positive`]: root candidates are tried as
/// positive pieces and the search maximizes the positive player's score. To
/// play the negative side, hand it a board with the colors swapped.
///
/// Sibling nodes below the root are pruned with alpha-beta, but every root
/// candidate is searched with a full window. Moves are tried in the order the
/// board lists them; no reordering is applied.
#[derive(Clone, Debug)]
pub struct Minimax {
    config: SearchConfig,
    leaf_count: usize,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            leaf_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The number of leaves evaluated by the most recent [`select_move`](Minimax::select_move) call
    pub fn last_leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Chooses a move for the positive player.
    ///
    /// Fails with [`SearchError::InvalidArgument`] if the depth is zero or
    /// there is no legal move to choose.
    pub fn select_move<B: Board>(&mut self, board: &B) -> Result<Selection, SearchError> {
        self.leaf_count = 0;

        if self.config.depth == 0 {
            return Err(SearchError::InvalidArgument(
                "search depth must be at least 1".to_string(),
            ));
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::InvalidArgument(
                "no legal moves to choose from".to_string(),
            ));
        }
        debug!("possible moves: {}", moves.len());

        let mut scores = Vec::with_capacity(moves.len());
        for &candidate in moves.iter() {
            let mut next = board.clone();
            next.apply_move(Color::Positive, candidate)?;
            let value = self.search(next, self.config.depth - 1, i32::MIN, i32::MAX, false)?;
            scores.push((candidate, value));
        }

        // the first candidate stands unless a later one is strictly better
        let mut best_move = moves[0];
        let mut best_value = i32::MIN;
        for &(candidate, value) in scores.iter() {
            if value > best_value {
                best_move = candidate;
                best_value = value;
            }
        }

        info!("number of leaves: {}", self.leaf_count);
        Ok(Selection {
            mv: best_move,
            value: best_value,
            leaf_count: self.leaf_count,
            scores,
        })
    }

    /// Performs game tree search on a board snapshot owned by this call
    ///
    /// Returns the value of the position for the positive player
    fn search<B: Board>(
        &mut self,
        board: B,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        let moves = board.legal_moves();
        if depth == 0 || moves.is_empty() {
            self.leaf_count += 1;
            return evaluate(&board, maximizing, self.config.coefficient_policy);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let mut next = board.clone();
                next.apply_move(Color::Positive, mv)?;
                let score = self.search(next, depth - 1, alpha, beta, false)?;
                best = best.max(score);
                alpha = alpha.max(score);
                // the minimizer already has a better option elsewhere
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let mut next = board.clone();
                next.apply_move(Color::Negative, mv)?;
                let score = self.search(next, depth - 1, alpha, beta, true)?;
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
