//! # dots-boxes
//!
//! A two-player Dots and Boxes game engine.
//!
//! Players take turns drawing a line between two adjacent dots. Drawing the
//! fourth side of a box claims it and earns another turn. When every box is
//! claimed, the player holding more boxes wins; equal counts tie.
//!
//! ## Design Principles
//!
//! 1. **One writer**: `GameEngine::place_edge` is the only way state
//!    changes during a game, and it either applies fully or not at all.
//!
//! 2. **Canonical identities**: edges and boxes are value types with
//!    orientation-independent equality, never formatted strings.
//!
//! 3. **Cheap snapshots**: state uses `im` persistent collections, so a
//!    front end can hold on to any number of past snapshots.
//!
//! ## Modules
//!
//! - `core`: players, grid geometry, configuration, state, errors
//! - `rules`: the engine and the turn-advancement rule
//! - `games`: session wrapper with notices, and a text board view
//!
//! ## Example
//!
//! ```
//! use dots_boxes::{Dot, GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::with_size(3).unwrap();
//! let placed = engine.place_edge(Dot::new(0, 0), Dot::new(1, 0)).unwrap();
//!
//! assert_eq!(placed.outcome, MoveOutcome::NoBoxCompleted);
//! assert_eq!(engine.state().current_player(), Player::Two);
//! assert!(engine.is_edge_placed(Dot::new(1, 0), Dot::new(0, 0)));
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    BoxId, ConfigError, Dot, Edge, GameError, GameSettings, GameState, GridConfig, GridPreset,
    MoveError, Orientation, Player, PlayerMap,
};

pub use crate::rules::{GameEngine, GameResult, MoveOutcome, Placement};

pub use crate::games::{render_board, Notice, ScoreLine, Session};
