//! Game state snapshot.
//!
//! `GameState` holds everything that changes during play:
//! - Whose turn it is
//! - Scores
//! - Placed edges and box ownership
//! - Whether the game is over
//!
//! Edge and ownership collections are `im` persistent structures, so a
//! snapshot clone is O(1) and a presentation layer can keep the previous
//! state around while the engine moves on.
//!
//! Fields are read-only outside the crate; the engine is the only writer.

use im::{HashMap as ImHashMap, HashSet as ImHashSet};
use serde::{Deserialize, Serialize};

use super::grid::{BoxId, Edge};
use super::player::{Player, PlayerMap};

/// Observable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) current_player: Player,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) placed_edges: ImHashSet<Edge>,
    #[serde(with = "owner_pairs")]
    pub(crate) box_owners: ImHashMap<BoxId, Player>,
    pub(crate) is_over: bool,
}

impl GameState {
    /// A fresh game: player 1 to move, nothing placed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_player: Player::One,
            scores: PlayerMap::default(),
            placed_edges: ImHashSet::new(),
            box_owners: ImHashMap::new(),
            is_over: false,
        }
    }

    /// The player to move. Meaningless once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get a player's score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Get player 1's score.
    #[must_use]
    pub fn player1_score(&self) -> u32 {
        self.scores[Player::One]
    }

    /// Get player 2's score.
    #[must_use]
    pub fn player2_score(&self) -> u32 {
        self.scores[Player::Two]
    }

    /// Get both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Sum of both scores, i.e. the number of claimed boxes.
    #[must_use]
    pub fn claimed_boxes(&self) -> usize {
        (self.scores[Player::One] + self.scores[Player::Two]) as usize
    }

    /// Get every edge drawn so far.
    #[must_use]
    pub fn placed_edges(&self) -> &ImHashSet<Edge> {
        &self.placed_edges
    }

    /// Check whether `edge` has been drawn.
    #[must_use]
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.placed_edges.contains(edge)
    }

    /// Get the owner of every claimed box.
    #[must_use]
    pub fn box_owners(&self) -> &ImHashMap<BoxId, Player> {
        &self.box_owners
    }

    /// Get the owner of `b`, if claimed.
    #[must_use]
    pub fn owner(&self, b: BoxId) -> Option<Player> {
        self.box_owners.get(&b).copied()
    }

    /// Number of `b`'s four sides already drawn. Zero for a box no grid
    /// can hold.
    #[must_use]
    pub fn sides_drawn(&self, b: BoxId) -> usize {
        b.edges()
            .map_or(0, |sides| sides.iter().filter(|e| self.has_edge(e)).count())
    }

    /// Check whether every box has been claimed.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The player with more boxes, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let (one, two) = (self.scores[Player::One], self.scores[Player::Two]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// JSON map keys must be strings, so ownership travels as a list of pairs.
mod owner_pairs {
    use im::HashMap as ImHashMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::grid::BoxId;
    use crate::core::player::Player;

    pub fn serialize<S: Serializer>(
        owners: &ImHashMap<BoxId, Player>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(owners.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ImHashMap<BoxId, Player>, D::Error> {
        let pairs = Vec::<(BoxId, Player)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
