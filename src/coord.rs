//! A signed (row, column) pair, used both as a grid coordinate and as a step vector

use std::ops::{Add, Mul, Neg};

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// The four undirected line axes: vertical, both diagonals and horizontal.
/// Each axis is scanned in both its positive and negated sense.
pub const AXES: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
];

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the game grid
    pub fn in_bounds(self) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < HEIGHT && (self.col as usize) < WIDTH
    }

    /// Grid indices, if on the grid
    pub fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.row + other.row, self.col + other.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, scale: i32) -> Coord {
        Coord::new(self.row * scale, self.col * scale)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.row, -self.col)
    }
}
