//! Turn advancement.
//!
//! Completing at least one box earns the mover another turn; any other move
//! passes the turn. Once the game is over nobody moves again, so the turn
//! is left where it was.

use crate::core::Player;

/// Decide who moves after `mover` placed an edge that completed
/// `boxes_completed` boxes.
#[must_use]
pub fn next_player(mover: Player, boxes_completed: usize, is_over: bool) -> Player {
    if is_over || boxes_completed > 0 {
        mover
    } else {
        mover.other()
    }
}
