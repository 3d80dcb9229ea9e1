//! Rules of play.
//!
//! `GameEngine` enforces edge placement, box claiming, scoring and the end
//! of the game. The extra-turn decision is kept on its own in `turn` so it
//! can be checked independently of the rest of the move pipeline.

pub mod engine;
pub mod turn;

pub use engine::{GameEngine, GameResult, MoveOutcome, Placement};
pub use turn::next_player;
