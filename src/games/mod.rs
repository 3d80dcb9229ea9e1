//! Front-end helpers built on the engine.
//!
//! - `session`: display names, notices and scoreboard around a `GameEngine`
//! - `render`: plain-text board view

pub mod render;
pub mod session;

pub use render::render_board;
pub use session::{Notice, ScoreLine, Session};
