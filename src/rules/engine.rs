//! The Dots and Boxes rules engine.
//!
//! `GameEngine` owns a grid configuration and the state of one game. Its
//! only mutating operations are `place_edge` and `reset`; everything else
//! is a query.
//!
//! ## Move pipeline
//!
//! 1. Reject if the game is over, a dot is off the grid, the dots are not
//!    adjacent, or the edge is already drawn. State is untouched.
//! 2. Record the edge.
//! 3. Claim every bordering box (at most two) whose four sides are now
//!    drawn and that has no owner yet. All claims go to the mover.
//! 4. Mark the game over when every box is owned.
//! 5. Advance the turn (see `rules::turn`).

use smallvec::SmallVec;

use super::turn::next_player;
use crate::core::{
    all_edges, BoxId, Dot, Edge, GameError, GameState, GridConfig, MoveError, Player,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both players own the same number of boxes.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What a successful placement did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// No box was closed; the turn passed.
    NoBoxCompleted,
    /// One or two boxes were closed; the mover keeps the turn.
    BoxCompleted(u8),
    /// The last box was closed.
    GameOver(GameResult),
}

/// Everything a caller needs after a successful `place_edge`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The canonical edge that was drawn.
    pub edge: Edge,
    /// Who drew it.
    pub player: Player,
    /// Boxes claimed by this move, in the order they were checked.
    pub claimed: SmallVec<[BoxId; 2]>,
    pub outcome: MoveOutcome,
    /// State after the move.
    pub state: GameState,
}

/// Dots and Boxes game engine.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GridConfig,
    state: GameState,
}

impl GameEngine {
    /// Start a new game on `config`.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    /// Start a new game with `size` dots per side.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self::new(GridConfig::new(size)?))
    }

    // === Queries ===

    /// Get the grid configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current state (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Get the number of boxes on the grid.
    #[must_use]
    pub fn total_boxes(&self) -> usize {
        self.config.total_boxes()
    }

    /// Check whether the edge between `a` and `b` has been drawn.
    ///
    /// Order of the dots does not matter. Pairs that do not form an edge
    /// on this grid are never placed.
    #[must_use]
    pub fn is_edge_placed(&self, a: Dot, b: Dot) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.state.has_edge(&edge))
    }

    /// Get the owner of `b`, if claimed.
    #[must_use]
    pub fn owner_of(&self, b: BoxId) -> Option<Player> {
        self.state.owner(b)
    }

    /// Number of `b`'s sides already drawn (0 to 4). Zero for a box off
    /// this grid.
    #[must_use]
    pub fn box_edge_count(&self, b: BoxId) -> usize {
        if !b.in_bounds(self.config.size()) {
            return 0;
        }
        self.state.sides_drawn(b)
    }

    /// Every edge not yet drawn, row by row.
    pub fn available_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        all_edges(self.config.size()).filter(move |e| !self.state.has_edge(e))
    }

    /// Final result, or `None` while the game is in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.is_over {
            return None;
        }
        Some(match self.state.leader() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Tie,
        })
    }

    // === Moves ===

    /// Draw the edge between `a` and `b` for the current player.
    ///
    /// On error the state is unchanged.
    pub fn place_edge(&mut self, a: Dot, b: Dot) -> Result<Placement, GameError> {
        self.check_in_play()?;
        let size = self.config.size();
        if !a.in_bounds(size) || !b.in_bounds(size) {
            return Err(MoveError::OutOfBounds.into());
        }
        let edge = Edge::new(a, b).ok_or(MoveError::NotAdjacent)?;
        self.apply(edge)
    }

    /// Draw an already-built edge for the current player.
    pub fn place(&mut self, edge: Edge) -> Result<Placement, GameError> {
        self.check_in_play()?;
        if !edge.in_bounds(self.config.size()) {
            return Err(MoveError::OutOfBounds.into());
        }
        self.apply(edge)
    }

    fn check_in_play(&self) -> Result<(), MoveError> {
        if self.state.is_over {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, edge: Edge) -> Result<Placement, GameError> {
        if self.state.has_edge(&edge) {
            return Err(MoveError::DuplicateEdge.into());
        }

        let state = &mut self.state;
        let mover = state.current_player;
        state.placed_edges.insert(edge);

        let mut claimed: SmallVec<[BoxId; 2]> = SmallVec::new();
        for b in edge.bordering_boxes(self.config.size()) {
            let closed = b
                .edges()
                .is_some_and(|sides| sides.iter().all(|side| state.placed_edges.contains(side)));
            if closed && !state.box_owners.contains_key(&b) {
                state.box_owners.insert(b, mover);
                state.scores[mover] += 1;
                claimed.push(b);
            }
        }

        state.is_over = state.claimed_boxes() == self.config.total_boxes();
        state.current_player = next_player(mover, claimed.len(), state.is_over);

        let outcome = match self.result() {
            Some(result) => MoveOutcome::GameOver(result),
            None if claimed.is_empty() => MoveOutcome::NoBoxCompleted,
            None => MoveOutcome::BoxCompleted(claimed.len() as u8),
        };

        Ok(Placement {
            edge,
            player: mover,
            claimed,
            outcome,
            state: self.state.clone(),
        })
    }

    // === Lifecycle ===

    /// Discard the current game and start a fresh one, optionally on a new
    /// grid.
    pub fn reset(&mut self, config: Option<GridConfig>) -> &GameState {
        if let Some(config) = config {
            self.config = config;
        }
        self.state = GameState::new();
        &self.state
    }

    /// Start a fresh game with `size` dots per side.
    ///
    /// An invalid size leaves the current game untouched.
    pub fn reset_with_size(&mut self, size: usize) -> Result<&GameState, GameError> {
        let config = GridConfig::new(size)?;
        Ok(self.reset(Some(config)))
    }
}
