//! Plain-text board view for terminals and test output.
//!
//! ```text
//! o---o   o
//! | 2 |
//! o---o   o
//! ```
//!
//! Dots are `o`, drawn edges are `---` or `|`, and a claimed box shows its
//! owner's number.

use crate::core::{BoxId, Dot, Edge, GameState, GridConfig};

/// Render `state` on `grid` as text, one line per row.
#[must_use]
pub fn render_board(state: &GameState, grid: &GridConfig) -> String {
    let size = grid.size();
    let mut out = String::new();

    for y in 0..size {
        let mut line = String::new();
        for x in 0..size {
            line.push('o');
            if x + 1 < size {
                let drawn = state.has_edge(&Edge::horizontal(Dot::new(x, y)));
                line.push_str(if drawn { "---" } else { "   " });
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if y + 1 == size {
            break;
        }

        let mut line = String::new();
        for x in 0..size {
            let drawn = state.has_edge(&Edge::vertical(Dot::new(x, y)));
            line.push(if drawn { '|' } else { ' ' });
            if x + 1 < size {
                match state.owner(BoxId::new(x, y)) {
                    Some(owner) => line.push_str(&format!(" {} ", owner.number())),
                    None => line.push_str("   "),
                }
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
