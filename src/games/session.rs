//! Presentation-facing game session.
//!
//! A `Session` pairs a `GameEngine` with `GameSettings` and turns engine
//! outcomes into the short notices a front end shows ("Ada completed a
//! box!", "It's a tie!"). It owns no rules of its own.

use serde::{Deserialize, Serialize};

use crate::core::{Dot, GameError, GameSettings, GameState, Player};
use crate::rules::{GameEngine, GameResult, MoveOutcome, Placement};

/// A message for the player, with the tone it should be shown in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Info(String),
    Success(String),
}

impl Notice {
    /// Get the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Success(text) => text,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// One row of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player: Player,
    pub name: String,
    pub score: u32,
    /// True for the player to move; false for both once the game is over.
    pub active: bool,
}

/// A game plus its display settings.
#[derive(Clone, Debug, Default)]
pub struct Session {
    settings: GameSettings,
    engine: GameEngine,
}

impl Session {
    /// Create a session and start a game with `settings`.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        let engine = GameEngine::new(settings.grid);
        Self { settings, engine }
    }

    /// Get the current settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Get the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Get the current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Get a player's display name.
    #[must_use]
    pub fn player_name(&self, player: Player) -> &str {
        self.settings.name(player)
    }

    /// Draw an edge for the current player.
    ///
    /// Returns the placement and the notice to show, if any.
    pub fn play(&mut self, a: Dot, b: Dot) -> Result<(Placement, Option<Notice>), GameError> {
        let placement = self.engine.place_edge(a, b)?;
        let notice = self.notice_for(&placement);
        Ok((placement, notice))
    }

    fn notice_for(&self, placement: &Placement) -> Option<Notice> {
        match placement.outcome {
            MoveOutcome::NoBoxCompleted => None,
            MoveOutcome::BoxCompleted(1) => Some(Notice::Info(format!(
                "{} completed a box!",
                self.player_name(placement.player)
            ))),
            MoveOutcome::BoxCompleted(n) => Some(Notice::Info(format!(
                "{} completed {} boxes!",
                self.player_name(placement.player),
                n
            ))),
            MoveOutcome::GameOver(GameResult::Winner(winner)) => Some(Notice::Success(format!(
                "{} wins!",
                self.player_name(winner)
            ))),
            MoveOutcome::GameOver(GameResult::Tie) => {
                Some(Notice::Info("It's a tie!".to_string()))
            }
        }
    }

    /// Start a new game with the current settings.
    pub fn reset(&mut self) -> Notice {
        self.engine.reset(Some(self.settings.grid));
        Notice::Info("Game reset! Starting a new game.".to_string())
    }

    /// Replace the settings and start a new game with them.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Notice {
        self.settings = settings;
        self.reset();
        Notice::Success("Game settings updated!".to_string())
    }

    /// Names, scores and turn indicator for both players.
    #[must_use]
    pub fn scoreboard(&self) -> Vec<ScoreLine> {
        let state = self.state();
        state
            .scores()
            .iter()
            .map(|(player, &score)| ScoreLine {
                player,
                name: self.player_name(player).to_string(),
                score,
                active: !state.is_over() && state.current_player() == player,
            })
            .collect()
    }
}
