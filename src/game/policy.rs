//! Automated play.
//!
//! A `MovePolicy` picks one [`Choice`] for the side to act. The controller
//! validates whatever comes back, so a policy cannot corrupt a game: an
//! illegal choice is rejected like any other bad input.
//!
//! Two policies ship with the crate:
//! - `RandomPolicy`: uniform over [`Game::available_choices`], seeded.
//! - `FirstTargetPolicy`: always the first available choice. Handy in tests.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, NodeId, PieceId};

use super::controller::Game;

/// One action available to the side to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Place a goat on an empty node.
    Place(NodeId),

    /// Move a piece to one of its legal targets.
    Move { piece: PieceId, to: NodeId },
}

impl Choice {
    /// Node the choice ends on.
    #[must_use]
    pub const fn destination(&self) -> NodeId {
        match *self {
            Choice::Place(node) => node,
            Choice::Move { to, .. } => to,
        }
    }
}

/// Strategy for an automated side.
pub trait MovePolicy {
    /// Pick an action for the side to act.
    ///
    /// Returns `None` if there is nothing to choose from.
    fn choose(&mut self, game: &Game) -> Option<Choice>;
}

/// Uniform random choice among all available actions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Seed from the game's configuration.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self { rng: game.rng() }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, game: &Game) -> Option<Choice> {
        let choices = game.available_choices();
        self.rng.choose(&choices).copied()
    }
}

/// Always takes the first available action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTargetPolicy;

impl MovePolicy for FirstTargetPolicy {
    fn choose(&mut self, game: &Game) -> Option<Choice> {
        game.available_choices().into_iter().next()
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn choose(&mut self, game: &Game) -> Option<Choice> {
        (**self).choose(game)
    }
}
