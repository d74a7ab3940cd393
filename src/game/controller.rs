//! Turn and phase control.
//!
//! `Game` owns the board and sequences the rules:
//!
//! - Goats move first. While fewer than [`TOTAL_GOATS`] goats have been
//!   placed, a goat turn is always a placement.
//! - Tiger turns are ordinary moves, including during the placement phase.
//! - After every move the win evaluator runs; a result freezes the game.
//!   By default ([`GoatCount::OnBoard`]) this is exactly
//!   [`rules::evaluate`], and placements are not evaluated. Opting into
//!   [`GoatCount::InPlay`] counts goats still to be placed and evaluates
//!   after placements too.
//! - Any input that does not fit the current phase is returned as a
//!   [`Rejection`] and changes nothing.
//!
//! ## Human and automated input
//!
//! `click`, `place_goat`, `select`, `move_selected`, `move_piece` and
//! `play_move` are human input: they are rejected with
//! [`Rejection::AutomatedRole`] while the side to act is automated. That
//! side only acts through [`Game::play_automated`].
//!
//! ## Example
//!
//! ```
//! use aadu_puli::game::{Game, Transition};
//! use aadu_puli::core::{NodeId, Role};
//!
//! let mut game = Game::default();
//! game.place_goat(NodeId::new(1)).unwrap();
//!
//! assert_eq!(game.turn(), Role::Tiger);
//! assert_eq!(game.goats_placed(), 1);
//! assert!(game.place_goat(NodeId::new(4)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::BoardState;
use crate::core::{
    GameConfig, GameRng, GoatCount, Move, MoveRecord, NodeId, NodeSet, Piece, PieceId, Role, FIRST_TO_MOVE, TIGER_START,
    TOTAL_GOATS,
};
use crate::rules::{self, GameResult};

use super::error::Rejection;
use super::policy::{Choice, MovePolicy};

/// Turn, placement progress and result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Goats placed so far. Never decreases.
    pub goats_placed: u32,

    /// Side to act.
    pub turn: Role,

    /// Set once, when the game ends.
    pub result: Option<GameResult>,
}

impl Phase {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            goats_placed: 0,
            turn: FIRST_TO_MOVE,
            result: None,
        }
    }

    /// Goats still to be placed.
    #[must_use]
    pub const fn goats_remaining(&self) -> u32 {
        TOTAL_GOATS.saturating_sub(self.goats_placed)
    }

    /// Are goats still being placed?
    #[must_use]
    pub const fn is_placing(&self) -> bool {
        self.goats_placed < TOTAL_GOATS
    }

    /// Must the side to act place a goat?
    #[must_use]
    pub const fn placement_due(&self) -> bool {
        self.is_placing() && matches!(self.turn, Role::Goat)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::new()
    }
}

/// What an accepted input did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A goat was placed. `result` is set if the placement ended the game;
    /// otherwise the turn passed to the tigers.
    Placed { piece: Piece, result: Option<GameResult> },

    /// A piece was selected; its legal targets are now highlighted.
    Selected { piece: PieceId, targets: NodeSet },

    /// A piece moved. `result` is set if the move ended the game.
    Moved { record: MoveRecord, result: Option<GameResult> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Selection {
    piece: PieceId,
    targets: NodeSet,
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: BoardState,
    phase: Phase,
    /// Id for the next goat. Ids are never reused, even after captures.
    next_goat_id: u32,
    selection: Option<Selection>,
    last_move: Option<MoveRecord>,
    moves_played: u32,
}

impl Game {
    /// Start a new game: three tigers on their starting nodes, goat to place.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: BoardState::initial(),
            phase: Phase::new(),
            next_goat_id: TIGER_START.len() as u32 + 1,
            selection: None,
            last_move: None,
            moves_played: 0,
        }
    }

    /// Discard the current game and start over with the same configuration.
    pub fn restart(&mut self) {
        debug!("restarting game");
        *self = Self::new(self.config.clone());
    }

    /// An RNG seeded from the configuration, for automated policies.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.config.seed)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Change which side, if any, is played automatically.
    pub fn set_ai_role(&mut self, role: Option<Role>) {
        self.config.ai_role = role;
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> Role {
        self.phase.turn
    }

    #[must_use]
    pub fn goats_placed(&self) -> u32 {
        self.phase.goats_placed
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.phase.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Number of moves (not placements) applied so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Currently selected piece.
    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.selection.map(|s| s.piece)
    }

    /// Targets of the selected piece (empty without a selection).
    #[must_use]
    pub fn highlighted_targets(&self) -> NodeSet {
        self.selection.map_or(NodeSet::empty(), |s| s.targets)
    }

    /// Legal targets of a piece under the current phase.
    ///
    /// Empty for unknown pieces.
    #[must_use]
    pub fn targets_for(&self, piece: PieceId) -> NodeSet {
        self.board
            .get(piece)
            .map_or(NodeSet::empty(), |p| rules::legal_targets(p, &self.board, self.phase.goats_remaining()))
    }

    /// Every action the side to act may take, in a stable order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn available_choices(&self) -> Vec<Choice> {
        if self.is_over() {
            return Vec::new();
        }
        if self.phase.placement_due() {
            return rules::placement_targets(&self.board).iter().map(Choice::Place).collect();
        }

        let goats_remaining = self.phase.goats_remaining();
        self.board
            .pieces()
            .filter(|p| p.role == self.phase.turn)
            .flat_map(|p| {
                rules::legal_targets(p, &self.board, goats_remaining)
                    .iter()
                    .map(move |to| Choice::Move { piece: p.id, to })
            })
            .collect()
    }

    /// One-line status for display.
    ///
    /// The placement prompt stays up until all goats are in, on tiger turns
    /// as well.
    #[must_use]
    pub fn status(&self) -> String {
        match self.phase.result {
            Some(result) => result.to_string(),
            None if self.phase.is_placing() => {
                format!("Place goat ({}/{})", self.phase.goats_placed + 1, TOTAL_GOATS)
            }
            None => format!("Turn: {}", self.phase.turn),
        }
    }

    // === Inputs ===

    /// Handle a click on `node` the way a human player's input is handled.
    ///
    /// - During a goat placement turn, place a goat.
    /// - Without a selection, select the side-to-act's piece on `node`.
    /// - With a selection, move it to `node`, or clear the selection if
    ///   `node` is not one of its targets.
    ///
    /// Clicks are ignored while the side to act is automated.
    #[instrument(level = "debug", skip(self), fields(turn = %self.phase.turn))]
    pub fn click(&mut self, node: NodeId) -> Result<Transition, Rejection> {
        self.ensure_human()?;

        if self.phase.placement_due() {
            return self.try_place(node);
        }

        match self.selection {
            None => self.select(node),
            Some(_) => self.move_selected(node),
        }
    }

    /// Place a goat on `node`.
    #[instrument(level = "debug", skip(self))]
    pub fn place_goat(&mut self, node: NodeId) -> Result<Transition, Rejection> {
        self.ensure_human()?;
        self.try_place(node)
    }

    /// Select the side-to-act's piece on `node` and highlight its targets.
    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, node: NodeId) -> Result<Transition, Rejection> {
        self.ensure_human()?;
        if self.phase.placement_due() {
            return Err(Rejection::PlacementPending);
        }

        let piece = *self.board.piece_at(node).ok_or(Rejection::NoPieceAt { node })?;
        if piece.role != self.phase.turn {
            return Err(Rejection::NotYourTurn { role: piece.role });
        }

        let targets = rules::legal_targets(&piece, &self.board, self.phase.goats_remaining());
        self.selection = Some(Selection { piece: piece.id, targets });
        debug!(piece = %piece.id, targets = targets.len(), "selected piece");

        Ok(Transition::Selected { piece: piece.id, targets })
    }

    /// Clear the current selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Move the selected piece to `node`.
    ///
    /// If `node` is not among the highlighted targets the selection is
    /// cleared and nothing else changes.
    #[instrument(level = "debug", skip(self))]
    pub fn move_selected(&mut self, node: NodeId) -> Result<Transition, Rejection> {
        self.ensure_human()?;
        let selection = self.selection.take().ok_or(Rejection::NothingSelected)?;
        if !selection.targets.contains(node) {
            return Err(Rejection::NotATarget { node });
        }
        self.try_move(selection.piece, node)
    }

    /// Move `piece` to `to`, capturing if `to` is a jump landing.
    #[instrument(level = "debug", skip(self))]
    pub fn move_piece(&mut self, piece: PieceId, to: NodeId) -> Result<Transition, Rejection> {
        self.ensure_human()?;
        self.try_move(piece, to)
    }

    /// Move `piece` exactly as described by `mv`.
    ///
    /// Lets a caller choose the plain step when a destination is also a jump
    /// landing. `mv` must be one of the piece's [`rules::legal_moves`].
    #[instrument(level = "debug", skip(self))]
    pub fn play_move(&mut self, piece: PieceId, mv: Move) -> Result<Transition, Rejection> {
        self.ensure_human()?;
        let mover = self.movable(piece)?;
        if !rules::legal_moves(&mover, &self.board, self.phase.goats_remaining()).contains(&mv) {
            return Err(Rejection::NotATarget { node: mv.to });
        }

        Ok(self.commit(&mover, mv))
    }

    /// Let `policy` act for the automated side.
    #[instrument(level = "debug", skip(self, policy))]
    pub fn play_automated<P: MovePolicy + ?Sized>(&mut self, policy: &mut P) -> Result<Transition, Rejection> {
        self.ensure_running()?;
        let role = self.phase.turn;
        if !self.config.is_automated(role) {
            return Err(Rejection::NotAutomated { role });
        }

        let choice = policy.choose(self).ok_or(Rejection::NoMoves { role })?;
        let outcome = match choice {
            Choice::Place(node) => self.try_place(node),
            Choice::Move { piece, to } => self.try_move(piece, to),
        };
        if let Err(reason) = &outcome {
            warn!(?choice, %reason, "automated policy chose an illegal action");
        }
        outcome
    }

    // === Internals ===

    fn ensure_running(&self) -> Result<(), Rejection> {
        if self.is_over() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }

    /// Running, and the side to act takes human input.
    fn ensure_human(&self) -> Result<(), Rejection> {
        self.ensure_running()?;
        if self.config.is_automated(self.phase.turn) {
            return Err(Rejection::AutomatedRole { role: self.phase.turn });
        }
        Ok(())
    }

    fn try_place(&mut self, node: NodeId) -> Result<Transition, Rejection> {
        self.ensure_running()?;
        if !self.phase.is_placing() {
            return Err(Rejection::PlacementClosed);
        }
        if self.phase.turn != Role::Goat {
            return Err(Rejection::NotYourTurn { role: Role::Goat });
        }
        if self.board.is_occupied(node) {
            return Err(Rejection::NodeOccupied { node });
        }

        let (board, goat) = rules::place_goat(node, &self.board, PieceId::new(self.next_goat_id));
        self.board = board;
        self.next_goat_id += 1;
        self.phase.goats_placed += 1;
        self.selection = None;

        let result = match self.config.goat_count {
            GoatCount::InPlay => rules::evaluate_in_play(&self.board, self.phase.goats_placed),
            GoatCount::OnBoard => None,
        };
        self.conclude(result);

        Ok(Transition::Placed { piece: goat, result })
    }

    fn try_move(&mut self, piece: PieceId, to: NodeId) -> Result<Transition, Rejection> {
        let mover = self.movable(piece)?;
        if !rules::legal_targets(&mover, &self.board, self.phase.goats_remaining()).contains(to) {
            return Err(Rejection::NotATarget { node: to });
        }

        let mv = rules::resolve_move(&mover, to, &self.board);
        Ok(self.commit(&mover, mv))
    }

    /// The piece, if it belongs to the side to act and that side may move.
    fn movable(&self, piece: PieceId) -> Result<Piece, Rejection> {
        self.ensure_running()?;
        let mover = *self.board.get(piece).ok_or(Rejection::UnknownPiece { piece })?;
        if mover.role != self.phase.turn {
            return Err(Rejection::NotYourTurn { role: mover.role });
        }
        if self.phase.placement_due() {
            return Err(Rejection::PlacementPending);
        }
        Ok(mover)
    }

    fn commit(&mut self, mover: &Piece, mv: Move) -> Transition {
        let (board, record) = rules::apply_explicit(mover, mv, &self.board);
        let record = record.with_sequence(self.moves_played);

        self.board = board;
        self.moves_played += 1;
        self.selection = None;
        self.last_move = Some(record.clone());

        let result = rules::judge(&self.board, self.phase.goats_placed, self.config.goat_count);
        self.conclude(result);

        Transition::Moved { record, result }
    }

    /// Freeze the game on a result, otherwise hand the turn over.
    fn conclude(&mut self, result: Option<GameResult>) {
        match result {
            Some(result) => {
                debug!(%result, moves = self.moves_played, goats_placed = self.phase.goats_placed, "game over");
                self.phase.result = Some(result);
            }
            None => self.pass_turn(),
        }
    }

    fn pass_turn(&mut self) {
        self.phase.turn = self.phase.turn.opponent();
        debug!(turn = %self.phase.turn, goats_placed = self.phase.goats_placed, "turn passed");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
