//! Terminal conditions.
//!
//! Checked in priority order:
//! 1. Fewer than [`MIN_GOATS_ON_BOARD`] goats on the board: tigers win.
//! 2. Every tiger has no legal target: goats win.
//! 3. Otherwise the game continues.
//!
//! [`evaluate_in_play`] is the same check with goats still waiting to be
//! placed counted toward rule 1. Once all goats are placed the two agree.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::BoardState;
use crate::core::{GoatCount, Role, MIN_GOATS_ON_BOARD, TOTAL_GOATS};

use super::movegen::legal_moves;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameResult {
    TigerWins,
    GoatWins,
}

impl GameResult {
    /// The winning side.
    #[must_use]
    pub const fn winner(self) -> Role {
        match self {
            GameResult::TigerWins => Role::Tiger,
            GameResult::GoatWins => Role::Goat,
        }
    }

    /// Check if `role` won.
    #[must_use]
    pub fn is_winner(self, role: Role) -> bool {
        self.winner() == role
    }
}

impl From<Role> for GameResult {
    fn from(role: Role) -> Self {
        match role {
            Role::Tiger => GameResult::TigerWins,
            Role::Goat => GameResult::GoatWins,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} win!", self.winner().plural())
    }
}

/// Decide whether the game is over.
///
/// Returns `None` while play continues. Pure; runs the move generator once
/// per tiger at most.
#[must_use]
pub fn evaluate(board: &BoardState, goats_placed: u32) -> Option<GameResult> {
    judge(board, goats_placed, GoatCount::OnBoard)
}

/// Like [`evaluate`], but goats not yet placed count as still in play.
#[must_use]
pub fn evaluate_in_play(board: &BoardState, goats_placed: u32) -> Option<GameResult> {
    judge(board, goats_placed, GoatCount::InPlay)
}

/// Evaluate with an explicit counting mode.
#[must_use]
pub fn judge(board: &BoardState, goats_placed: u32, counting: GoatCount) -> Option<GameResult> {
    let goats_remaining = TOTAL_GOATS.saturating_sub(goats_placed);
    let goats_counted = match counting {
        GoatCount::OnBoard => board.goat_count(),
        GoatCount::InPlay => board.goat_count() + goats_remaining as usize,
    };
    if goats_counted < MIN_GOATS_ON_BOARD {
        trace!(goats_counted, ?counting, "too few goats left");
        return Some(GameResult::TigerWins);
    }

    let tigers_blocked = board
        .tigers()
        .all(|tiger| legal_moves(tiger, board, goats_remaining).is_empty());

    if tigers_blocked {
        trace!("all tigers immobilised");
        return Some(GameResult::GoatWins);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeId;

    fn board_with(tigers: &[u8], goats: &[u8]) -> BoardState {
        let board = tigers
            .iter()
            .fold(BoardState::new(), |b, &t| b.with_tiger(NodeId::new(t)));
        goats.iter().fold(board, |b, &g| b.with_goat(NodeId::new(g)))
    }

    #[test]
    fn test_too_few_goats_means_tiger_win() {
        let board = board_with(&[2, 3, 5], &[11, 15, 22]);
        assert_eq!(evaluate(&board, 15), Some(GameResult::TigerWins));
    }

    #[test]
    fn test_goat_count_checked_before_mobility() {
        // Tiger on 11 is boxed in, but only 3 goats remain.
        let board = board_with(&[11], &[6, 9, 10]);
        assert_eq!(evaluate(&board, 15), Some(GameResult::TigerWins));
    }

    #[test]
    fn test_all_tigers_trapped_means_goat_win() {
        // Tiger 1 -> [2, 3], tiger 11 -> [10], tiger 15 -> [13]. Every landing
        // beyond those goats (4, 5, 6, 9, 12, 14) is filled as well.
        let board = board_with(&[1, 11, 15], &[2, 3, 4, 5, 6, 9, 10, 12, 13, 14]);
        assert_eq!(evaluate(&board, 15), Some(GameResult::GoatWins));
    }

    #[test]
    fn test_game_continues() {
        let board = board_with(&[2, 3, 5], &[11, 15, 22, 23]);
        assert_eq!(evaluate(&board, 4), None);
    }

    #[test]
    fn test_in_play_counts_goats_in_hand() {
        // One goat placed, fourteen to come.
        let board = board_with(&[2, 3, 9], &[23]);
        assert_eq!(evaluate(&board, 1), Some(GameResult::TigerWins));
        assert_eq!(evaluate_in_play(&board, 1), None);
    }

    #[test]
    fn test_modes_agree_after_placement() {
        let few = board_with(&[2, 3, 5], &[11, 15, 22]);
        let enough = board_with(&[2, 3, 5], &[11, 15, 22, 23]);
        for board in [few, enough] {
            assert_eq!(evaluate(&board, 15), evaluate_in_play(&board, 15));
        }
    }

    #[test]
    fn test_result_display_and_winner() {
        assert_eq!(GameResult::TigerWins.to_string(), "Tigers win!");
        assert_eq!(GameResult::GoatWins.to_string(), "Goats win!");
        assert!(GameResult::GoatWins.is_winner(Role::Goat));
        assert_eq!(GameResult::from(Role::Tiger), GameResult::TigerWins);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GameResult::TigerWins).unwrap();
        assert_eq!(json, "\"tiger-wins\"");
    }
}
