//! The board collaborator consumed by the search, and a gravity grid implementing it

use crate::{coord::*, error::BoardError, Color, HEIGHT, WIDTH};

/// An opaque move identifier; for [`GridBoard`] this is a 0-indexed column
pub type Move = usize;

/// Everything the search needs from a board.
///
/// `Clone` must produce a deep, independent copy: the search hands each
/// branch its own snapshot and mutates it in place.
pub trait Board: Clone {
    /// Playable moves in authoritative order, empty when nothing can be played
    fn legal_moves(&self) -> Vec<Move>;

    /// Places `color` according to `mv`
    fn apply_move(&mut self, color: Color, mv: Move) -> Result<(), BoardError>;

    /// True exactly when a line of four has been made
    fn is_game_over(&self) -> bool;

    fn cell(&self, row: usize, col: usize) -> Color;

    /// (rows, columns)
    fn dimensions(&self) -> (usize, usize) {
        (HEIGHT, WIDTH)
    }
}

/// A 6x7 grid where pieces drop to the lowest empty row of a column.
///
/// Row 0 is the top of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBoard {
    cells: [[Color; WIDTH]; HEIGHT],
    // number of pieces in each column
    heights: [usize; WIDTH],
    num_moves: usize,
    winner: Option<Color>,
}

impl GridBoard {
    pub fn new() -> Self {
        Self {
            cells: [[Color::Empty; WIDTH]; HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
            winner: None,
        }
    }

    /// Builds a board from a string of 1-indexed column digits, players alternating
    /// and the positive player moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, BoardError> {
        let mut board = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if board.is_game_over() {
                        return Err(BoardError::GameOver);
                    }
                    let color = board.to_move();
                    board.apply_move(color, column - 1)?;
                }
                _ => return Err(BoardError::Parse(column_char.to_string())),
            }
        }
        Ok(board)
    }

    /// Builds a board from its rows, top first: `X` is positive, `O` negative, `.` empty.
    ///
    /// Floating pieces are not rejected; the winner is found by a full scan.
    pub fn from_rows(rows: [&str; HEIGHT]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != WIDTH {
                return Err(BoardError::Parse(line.to_string()));
            }
            for (col, c) in chars.into_iter().enumerate() {
                board.cells[row][col] = match c {
                    'X' | 'x' => Color::Positive,
                    'O' | 'o' => Color::Negative,
                    '.' => Color::Empty,
                    other => return Err(BoardError::Parse(other.to_string())),
                };
            }
        }
        board.recount();
        Ok(board)
    }

    fn recount(&mut self) {
        self.num_moves = 0;
        self.heights = [0; WIDTH];
        self.winner = None;
        for col in 0..WIDTH {
            self.heights[col] = (0..HEIGHT)
                .filter(|&row| !self.cells[row][col].is_empty())
                .count();
            self.num_moves += self.heights[col];
        }
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let color = self.cells[row][col];
                if !color.is_empty() && self.completes_line(Coord::from((row, col)), color) {
                    self.winner = Some(color);
                }
            }
        }
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The color that made four in a row, if any
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Whose turn it is, assuming the positive player started and turns alternated
    pub fn to_move(&self) -> Color {
        if self.num_moves % 2 == 0 {
            Color::Positive
        } else {
            Color::Negative
        }
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// The same position with every piece's color swapped
    pub fn inverted(&self) -> Self {
        let mut board = self.clone();
        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.opponent();
            }
        }
        board.winner = self.winner.map(Color::opponent);
        board
    }

    /// The left-right reflection of this position
    pub fn mirrored(&self) -> Self {
        let mut board = self.clone();
        for row in board.cells.iter_mut() {
            row.reverse();
        }
        board.heights.reverse();
        board
    }

    // count of `color` pieces stepping away from `from` along `step`, excluding `from`
    fn run(&self, from: Coord, step: Coord, color: Color) -> usize {
        let mut count = 0;
        let mut pos = from + step;
        while let Some((row, col)) = pos.index() {
            if self.cells[row][col] != color {
                break;
            }
            count += 1;
            pos = pos + step;
        }
        count
    }

    fn completes_line(&self, at: Coord, color: Color) -> bool {
        AXES.iter()
            .any(|&axis| 1 + self.run(at, axis, color) + self.run(at, -axis, color) >= 4)
    }
}

impl Board for GridBoard {
    fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    fn apply_move(&mut self, color: Color, column: Move) -> Result<(), BoardError> {
        if color.is_empty() {
            return Err(BoardError::EmptyPiece);
        }
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        if !self.playable(column) {
            return Err(BoardError::ColumnFull { column });
        }
        let row = HEIGHT - 1 - self.heights[column];
        self.cells[row][column] = color;
        self.heights[column] += 1;
        self.num_moves += 1;

        if self.winner.is_none() && self.completes_line(Coord::from((row, column)), color) {
            self.winner = Some(color);
        }
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn cell(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GridBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Color::Positive => 'X',
                    Color::Negative => 'O',
                    Color::Empty => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
