//! Grid geometry: dots, edges, and boxes.
//!
//! ## Coordinates
//!
//! A grid of `size × size` dots uses `(x, y)` coordinates with
//! `0 <= x, y < size`; `x` grows to the right and `y` grows downward.
//!
//! ## Edges
//!
//! An `Edge` joins two adjacent dots. Its identity is canonical: the smaller
//! dot is always stored first, so `{A, B}` and `{B, A}` compare and hash
//! equal.
//!
//! ```
//! use dots_boxes::core::{Dot, Edge};
//!
//! let a = Dot::new(1, 2);
//! let b = Dot::new(2, 2);
//!
//! assert_eq!(Edge::new(a, b), Edge::new(b, a));
//! assert!(Edge::new(a, Dot::new(2, 3)).is_none()); // diagonal
//! ```
//!
//! ## Boxes
//!
//! A box is named by its top-left dot and is bounded by four edges.
//! Every edge borders at most two boxes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::MoveError;

/// A dot on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dot {
    pub x: u8,
    pub y: u8,
}

impl Dot {
    /// Create a dot at `(x, y)`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check whether this dot lies on a grid with `size` dots per side.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// Two dots are adjacent iff they share one coordinate and differ by
    /// exactly 1 in the other.
    #[must_use]
    pub const fn is_adjacent(self, other: Dot) -> bool {
        (self.y == other.y && self.x.abs_diff(other.x) == 1)
            || (self.x == other.x && self.y.abs_diff(other.y) == 1)
    }
}

impl std::fmt::Display for Dot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Direction of an edge on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Joins `(x, y)` and `(x + 1, y)`.
    Horizontal,
    /// Joins `(x, y)` and `(x, y + 1)`.
    Vertical,
}

/// An undirected unit line between two adjacent dots.
///
/// Constructed only through [`Edge::new`], [`Edge::horizontal`] or
/// [`Edge::vertical`], so `start < end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(Dot, Dot)", into = "(Dot, Dot)")]
pub struct Edge {
    start: Dot,
    end: Dot,
}

impl Edge {
    /// Create the canonical edge joining `a` and `b`.
    ///
    /// Returns `None` if the dots are not adjacent.
    #[must_use]
    pub fn new(a: Dot, b: Dot) -> Option<Self> {
        if !a.is_adjacent(b) {
            return None;
        }
        let (start, end) = if a < b { (a, b) } else { (b, a) };
        Some(Self { start, end })
    }

    /// The horizontal edge whose left end is `left`.
    ///
    /// `left.x` must be below `u8::MAX`.
    #[must_use]
    pub const fn horizontal(left: Dot) -> Self {
        Self {
            start: left,
            end: Dot::new(left.x + 1, left.y),
        }
    }

    /// The vertical edge whose top end is `top`.
    ///
    /// `top.y` must be below `u8::MAX`.
    #[must_use]
    pub const fn vertical(top: Dot) -> Self {
        Self {
            start: top,
            end: Dot::new(top.x, top.y + 1),
        }
    }

    /// The left (horizontal) or top (vertical) end.
    #[must_use]
    pub const fn start(&self) -> Dot {
        self.start
    }

    /// The right (horizontal) or bottom (vertical) end.
    #[must_use]
    pub const fn end(&self) -> Dot {
        self.end
    }

    /// Get the edge's direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        if self.start.y == self.end.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Check whether both ends lie on a grid with `size` dots per side.
    #[must_use]
    pub const fn in_bounds(&self, size: u8) -> bool {
        self.end.in_bounds(size)
    }

    /// Boxes this edge is a side of, on a grid with `size` dots per side.
    ///
    /// A horizontal edge borders the box above (if any) and the box below
    /// (if any); a vertical edge borders the box to its left and right.
    #[must_use]
    pub fn bordering_boxes(&self, size: u8) -> SmallVec<[BoxId; 2]> {
        let Dot { x, y } = self.start;
        let mut boxes = SmallVec::new();

        match self.orientation() {
            Orientation::Horizontal => {
                if y > 0 {
                    boxes.push(BoxId::new(x, y - 1));
                }
                if y < size.saturating_sub(1) {
                    boxes.push(BoxId::new(x, y));
                }
            }
            Orientation::Vertical => {
                if x > 0 {
                    boxes.push(BoxId::new(x - 1, y));
                }
                if x < size.saturating_sub(1) {
                    boxes.push(BoxId::new(x, y));
                }
            }
        }

        boxes
    }
}

impl TryFrom<(Dot, Dot)> for Edge {
    type Error = MoveError;

    fn try_from((a, b): (Dot, Dot)) -> Result<Self, Self::Error> {
        Edge::new(a, b).ok_or(MoveError::NotAdjacent)
    }
}

impl From<Edge> for (Dot, Dot) {
    fn from(edge: Edge) -> Self {
        (edge.start, edge.end)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A unit cell, named by its top-left dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoxId {
    pub x: u8,
    pub y: u8,
}

impl BoxId {
    /// Create a box ID from its top-left dot coordinates.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Get the dot at the box's top-left corner.
    #[must_use]
    pub const fn top_left(self) -> Dot {
        Dot::new(self.x, self.y)
    }

    /// Check whether this box exists on a grid with `size` dots per side.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.x < size.saturating_sub(1) && self.y < size.saturating_sub(1)
    }

    /// The four sides, in order: top, bottom, left, right.
    ///
    /// Returns `None` when the far corner would lie past coordinate 255;
    /// no grid holds such a box.
    #[must_use]
    pub fn edges(self) -> Option<[Edge; 4]> {
        let (x, y) = (self.x, self.y);
        let (right, below) = (x.checked_add(1)?, y.checked_add(1)?);
        Some([
            Edge::horizontal(Dot::new(x, y)),
            Edge::horizontal(Dot::new(x, below)),
            Edge::vertical(Dot::new(x, y)),
            Edge::vertical(Dot::new(right, y)),
        ])
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box({},{})", self.x, self.y)
    }
}

/// Every edge on a grid with `size` dots per side.
///
/// Yields row by row: the horizontal edges of a row, then the vertical
/// edges hanging below it.
pub fn all_edges(size: u8) -> impl Iterator<Item = Edge> {
    (0..size).flat_map(move |y| {
        let horizontal = (0..size.saturating_sub(1)).map(move |x| Edge::horizontal(Dot::new(x, y)));
        let vertical = (0..size)
            .filter(move |_| y + 1 < size)
            .map(move |x| Edge::vertical(Dot::new(x, y)));
        horizontal.chain(vertical)
    })
}

/// Every box on a grid with `size` dots per side, in row-major order.
pub fn all_boxes(size: u8) -> impl Iterator<Item = BoxId> {
    let n = size.saturating_sub(1);
    (0..n).flat_map(move |y| (0..n).map(move |x| BoxId::new(x, y)))
}
