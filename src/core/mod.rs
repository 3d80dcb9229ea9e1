//! Core game types: players, grid geometry, configuration, state, errors.
//!
//! Nothing in here enforces the rules of play; that lives in `rules`.
//! These are the value types the rules operate on.

pub mod player;
pub mod grid;
pub mod config;
pub mod error;
pub mod state;

pub use player::{Player, PlayerMap};
pub use grid::{all_boxes, all_edges, BoxId, Dot, Edge, Orientation};
pub use config::{GameSettings, GridConfig, GridPreset};
pub use error::{ConfigError, GameError, MoveError};
pub use state::GameState;
