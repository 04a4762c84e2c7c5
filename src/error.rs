use thiserror::Error;

use crate::grid::Pos;

/// Reasons a game could not be set up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("maze must be at least 4x4, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("no path from {start:?} to {goal:?} in generated maze")]
    NoPath { start: Pos, goal: Pos },

    #[error("cannot place {requested} entities, only {available} eligible cells")]
    NotEnoughCells { requested: usize, available: usize },
}

pub type SetupResult<T> = Result<T, SetupError>;
