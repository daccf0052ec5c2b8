//! Matches between two agents of different search depths

use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::time::Instant;

use crate::{
    board::{Board, GridBoard},
    error::SearchError,
    minimax::{Minimax, SearchConfig},
    Color, WIDTH,
};

/// Settings for a tournament between agent A and agent B
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TournamentConfig {
    pub agent_a: SearchConfig,
    pub agent_b: SearchConfig,
    /// Number of forced opening moves played before the agents take over
    pub opening_plies: usize,
}

/// The result of a single game, from agent A's point of view
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentResult {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl TournamentResult {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    fn record(mut self, outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self
    }
}

/// Every position reachable by `plies` moves from the empty board that is
/// still undecided, in move-string order
pub fn openings(plies: usize) -> Vec<GridBoard> {
    let mut positions = Vec::new();
    let mut moves = vec![0; plies];

    loop {
        let history: String = moves.iter().map(|&column| (column + 1).to_string()).collect();
        if let Ok(board) = GridBoard::from_moves(&history) {
            if !board.legal_moves().is_empty() {
                positions.push(board);
            }
        }

        // increment the move counter, carrying into earlier plies
        let mut d = plies;
        loop {
            if d == 0 {
                return positions;
            }
            d -= 1;
            moves[d] += 1;
            if moves[d] < WIDTH {
                break;
            }
            moves[d] = 0;
        }
    }
}

/// Plays a game to completion from `board`, returning the winner if there is one
pub fn play_game(
    mut board: GridBoard,
    positive: &mut Minimax,
    negative: &mut Minimax,
) -> Result<Option<Color>, SearchError> {
    while !board.legal_moves().is_empty() {
        let mover = board.to_move();
        // agents always play the positive color, so show the negative agent a swapped board
        let selection = match mover {
            Color::Negative => negative.select_move(&board.inverted())?,
            _ => positive.select_move(&board)?,
        };
        board.apply_move(mover, selection.mv)?;
    }
    Ok(board.winner())
}

/// Plays agent A against agent B from every opening, once with each color assignment
pub fn run(config: &TournamentConfig, show_progress: bool) -> Result<TournamentResult, SearchError> {
    let start = Instant::now();
    let games: Vec<(GridBoard, bool)> = openings(config.opening_plies)
        .into_iter()
        .flat_map(|board| vec![(board.clone(), true), (board, false)])
        .collect();

    let progress = if show_progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let outcomes = games
        .into_par_iter()
        .map(|(board, a_is_positive)| -> Result<GameOutcome, SearchError> {
            let mut agent_a = Minimax::new(config.agent_a);
            let mut agent_b = Minimax::new(config.agent_b);
            let winner = if a_is_positive {
                play_game(board, &mut agent_a, &mut agent_b)?
            } else {
                play_game(board, &mut agent_b, &mut agent_a)?
            };
            progress.inc(1);

            let a_color = if a_is_positive {
                Color::Positive
            } else {
                Color::Negative
            };
            Ok(match winner {
                None => GameOutcome::Draw,
                Some(color) if color == a_color => GameOutcome::Win,
                Some(_) => GameOutcome::Loss,
            })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;
    progress.finish();

    let result = outcomes
        .into_iter()
        .fold(TournamentResult::default(), TournamentResult::record);
    info!(
        "tournament of {} games finished in {}: {} wins, {} losses, {} draws",
        result.games(),
        HumanDuration(start.elapsed()),
        result.wins,
        result.losses,
        result.draws
    );
    Ok(result)
}
