//! Game configuration types.
//!
//! - `GridConfig`: the engine's only setting, the number of dots per side.
//! - `GameSettings`: `GridConfig` plus the cosmetic player display names.
//! - `GridPreset`: the grid sizes offered to players (3 to 7).
//!
//! Both config types are validated on construction, so a value that exists
//! is always usable.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Player, PlayerMap};

/// Grid dimensions: `size × size` dots, `(size - 1)²` boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridConfig {
    size: u8,
}

impl GridConfig {
    /// Smallest grid the engine accepts (a single box).
    pub const MIN_SIZE: usize = 2;

    /// Largest grid the engine accepts; dot coordinates are `u8`.
    pub const MAX_SIZE: usize = u8::MAX as usize;

    /// Default grid size.
    pub const DEFAULT_SIZE: u8 = 5;

    /// Create a grid configuration with `size` dots per side.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < Self::MIN_SIZE {
            return Err(ConfigError::GridTooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(ConfigError::GridTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size: size as u8 })
    }

    /// Dots per side.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Boxes per side.
    #[must_use]
    pub const fn boxes_per_side(&self) -> usize {
        self.size as usize - 1
    }

    /// Number of boxes on the grid.
    #[must_use]
    pub const fn total_boxes(&self) -> usize {
        self.boxes_per_side() * self.boxes_per_side()
    }

    /// Number of edges on the grid.
    #[must_use]
    pub const fn total_edges(&self) -> usize {
        2 * self.size as usize * self.boxes_per_side()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl TryFrom<usize> for GridConfig {
    type Error = ConfigError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridConfig> for usize {
    fn from(config: GridConfig) -> Self {
        config.size as usize
    }
}

/// Grid sizes offered to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPreset {
    Easy,
    Medium,
    Standard,
    Hard,
    Expert,
}

impl GridPreset {
    /// Every preset, smallest grid first.
    pub const ALL: [GridPreset; 5] = [
        GridPreset::Easy,
        GridPreset::Medium,
        GridPreset::Standard,
        GridPreset::Hard,
        GridPreset::Expert,
    ];

    /// Dots per side for this preset.
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            GridPreset::Easy => 3,
            GridPreset::Medium => 4,
            GridPreset::Standard => 5,
            GridPreset::Hard => 6,
            GridPreset::Expert => 7,
        }
    }

    /// Find the preset with `size` dots per side.
    #[must_use]
    pub fn from_size(size: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.size() == size)
    }

    /// Get the grid configuration for this preset.
    #[must_use]
    pub fn grid(self) -> GridConfig {
        GridConfig { size: self.size() }
    }

    /// Menu label, e.g. `"5×5 (Standard)"`.
    #[must_use]
    pub fn label(self) -> String {
        let name = match self {
            GridPreset::Easy => "Easy",
            GridPreset::Medium => "Medium",
            GridPreset::Standard => "Standard",
            GridPreset::Hard => "Hard",
            GridPreset::Expert => "Expert",
        };
        format!("{0}×{0} ({1})", self.size(), name)
    }
}

/// Session settings: grid plus display names.
///
/// Names are labels for notifications and scoreboards only; the engine
/// never sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSettings")]
pub struct GameSettings {
    pub grid: GridConfig,
    names: PlayerMap<String>,
}

/// Unchecked wire form of `GameSettings`.
#[derive(Deserialize)]
struct RawSettings {
    grid: GridConfig,
    names: PlayerMap<String>,
}

impl GameSettings {
    /// Longest accepted display name, in characters.
    pub const MAX_NAME_LEN: usize = 15;

    /// Create settings with default names.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            names: PlayerMap::new(|p| p.to_string()),
        }
    }

    /// Set the grid size.
    pub fn with_size(mut self, size: usize) -> Result<Self, ConfigError> {
        self.grid = GridConfig::new(size)?;
        Ok(self)
    }

    /// Set a player's display name. Surrounding whitespace is trimmed.
    pub fn with_name(mut self, player: Player, name: impl AsRef<str>) -> Result<Self, ConfigError> {
        self.names[player] = Self::validate_name(name.as_ref())?;
        Ok(self)
    }

    /// Get a player's display name.
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.names[player]
    }

    fn validate_name(name: &str) -> Result<String, ConfigError> {
        let name = name.trim();
        let len = name.chars().count();
        if len == 0 {
            return Err(ConfigError::EmptyName);
        }
        if len > Self::MAX_NAME_LEN {
            return Err(ConfigError::NameTooLong {
                len,
                max: Self::MAX_NAME_LEN,
            });
        }
        Ok(name.to_string())
    }
}

impl TryFrom<RawSettings> for GameSettings {
    type Error = ConfigError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let names = PlayerMap::from_pair(
            Self::validate_name(&raw.names[Player::One])?,
            Self::validate_name(&raw.names[Player::Two])?,
        );
        Ok(Self {
            grid: raw.grid,
            names,
        })
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
