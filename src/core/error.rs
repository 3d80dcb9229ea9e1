//! Typed rejections returned by the engine.
//!
//! Every error here is a validation failure. The engine checks before it
//! mutates, so the game state is untouched whenever one is returned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an edge placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("not adjacent")]
    NotAdjacent,
    #[error("duplicate edge")]
    DuplicateEdge,
    #[error("game over")]
    GameOver,
    #[error("out of bounds")]
    OutOfBounds,
}

/// Why a grid or settings configuration was refused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("grid size too small: {size} (minimum {min})")]
    GridTooSmall { size: usize, min: usize },
    #[error("grid size too large: {size} (maximum {max})")]
    GridTooLarge { size: usize, max: usize },
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player name too long: {len} characters (maximum {max})")]
    NameTooLong { len: usize, max: usize },
}

/// Top-level engine error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
