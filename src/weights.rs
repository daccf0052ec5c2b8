//! Constant tables used by the static evaluator

use log::trace;

use crate::{error::SearchError, HEIGHT, WIDTH};

/// Positional weight of each cell, highest in the centre.
///
/// Symmetric under left-right and top-bottom reflection, so it does not
/// matter which end of the grid is the bottom.
pub const POSITION_WEIGHTS: [[i32; WIDTH]; HEIGHT] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

/// Value of an open line by the number of connected pieces beside the seed piece
pub const RUN_COEFFICIENTS: [i32; 3] = [0, 10, 100];

/// What to do when a connected run is longer than [`RUN_COEFFICIENTS`] covers
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CoefficientPolicy {
    /// Use the last coefficient for any longer run
    Saturate,
    /// Fail with [`SearchError::HeuristicRange`]
    Strict,
}

impl Default for CoefficientPolicy {
    fn default() -> Self {
        CoefficientPolicy::Saturate
    }
}

/// Looks up the coefficient for a connected run of `length`
pub fn run_coefficient(length: usize, policy: CoefficientPolicy) -> Result<i32, SearchError> {
    match RUN_COEFFICIENTS.get(length) {
        Some(&coefficient) => Ok(coefficient),
        None => match policy {
            CoefficientPolicy::Saturate => {
                trace!("run of {} saturated to the last coefficient", length);
                Ok(RUN_COEFFICIENTS[RUN_COEFFICIENTS.len() - 1])
            }
            CoefficientPolicy::Strict => Err(SearchError::HeuristicRange { length }),
        },
    }
}
