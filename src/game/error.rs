//! Rejected selections.
//!
//! A `Rejection` means "nothing happened": the board, the turn, the placed
//! count and the result are exactly as before the call. Hosts usually just
//! ignore it; the reason is there for status lines and logging.

use derive_more::{Display, Error};

use crate::core::{NodeId, PieceId, Role};

/// Why an input was not acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    #[display("the game is over")]
    GameOver,

    #[display("it is not the {role}'s turn")]
    NotYourTurn { role: Role },

    #[display("the {role} side is played automatically")]
    AutomatedRole { role: Role },

    #[display("the {role} side is not played automatically")]
    NotAutomated { role: Role },

    #[display("all goats have been placed")]
    PlacementClosed,

    #[display("a goat must be placed first")]
    PlacementPending,

    #[display("{node} is occupied")]
    NodeOccupied { node: NodeId },

    #[display("no piece on {node}")]
    NoPieceAt { node: NodeId },

    #[display("{piece} is not on the board")]
    UnknownPiece { piece: PieceId },

    #[display("{node} is not a legal target")]
    NotATarget { node: NodeId },

    #[display("no piece is selected")]
    NothingSelected,

    #[display("the {role} side has no legal move")]
    NoMoves { role: Role },
}
