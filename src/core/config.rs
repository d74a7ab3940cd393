//! Rule constants and game configuration.
//!
//! The ruleset itself is fixed: the constants below are part of the game,
//! not knobs. `GameConfig` only carries orchestration choices a host makes
//! at startup: which side, if any, is played automatically, the seed for
//! automated play, and how the controller counts goats against
//! [`MIN_GOATS_ON_BOARD`] while goats are still being placed.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::piece::Role;

/// Goats placed over the course of a game.
pub const TOTAL_GOATS: u32 = 15;

/// Tigers win as soon as fewer than this many goats remain on the board.
pub const MIN_GOATS_ON_BOARD: usize = 4;

/// Starting nodes of the three tigers.
pub const TIGER_START: [NodeId; 3] = [NodeId::new(2), NodeId::new(3), NodeId::new(5)];

/// Side that acts first.
pub const FIRST_TO_MOVE: Role = Role::Goat;

/// Which goats the controller counts against [`MIN_GOATS_ON_BOARD`].
///
/// The two modes only differ while goats are still being placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoatCount {
    /// Goats on the board only, exactly as [`evaluate`](crate::rules::evaluate)
    /// counts them. The first tiger move of a game (one goat on the board)
    /// already ends it.
    #[default]
    OnBoard,

    /// Goats on the board plus goats still to be placed. Placements are
    /// evaluated as well.
    InPlay,
}

/// Host-level configuration.
///
/// ## Example
///
/// ```
/// use aadu_puli::core::{GameConfig, Role};
///
/// let config = GameConfig::new().with_ai_role(Role::Tiger).with_seed(7);
/// assert_eq!(config.ai_role, Some(Role::Tiger));
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side played by an automated policy. `None` means both sides are human.
    pub ai_role: Option<Role>,

    /// Seed for the RNG handed to automated policies.
    pub seed: u64,

    #[serde(default)]
    pub goat_count: GoatCount,
}

impl GameConfig {
    /// Both sides human, seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `role` automatically.
    #[must_use]
    pub fn with_ai_role(mut self, role: Role) -> Self {
        self.ai_role = Some(role);
        self
    }

    /// Turn automated play off.
    #[must_use]
    pub fn without_ai(mut self) -> Self {
        self.ai_role = None;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_goat_count(mut self, goat_count: GoatCount) -> Self {
        self.goat_count = goat_count;
        self
    }

    /// Is `role` driven by an automated policy?
    #[must_use]
    pub fn is_automated(&self, role: Role) -> bool {
        self.ai_role == Some(role)
    }
}
