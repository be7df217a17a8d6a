//! Game session state machine.
//!
//! `GameSession` owns the live board and is the only type external
//! collaborators drive. It keeps turn order, the interactive selection, the
//! per-square legal move table and the terminal status, and it defers the
//! turn flip of a promoting move until the promotion piece is chosen.
//!
//! Mutating calls must be serialized by the caller; legality checks only ever
//! touch scratch copies of the board.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::chess_move::{ChessMove, MoveEffects};
use crate::moves::wire_move::WireMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(label)
    }
}

/// Result of `select` / `attempt_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move is now selected.
    Selected,
    /// The selection's move to the chosen square was committed.
    Moved(MoveEffects),
    /// Nothing matched; any pending selection was cleared.
    Deselected,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    move_history: Vec<ChessMove>,
    turn: Color,
    selection: Option<Square>,
    legal_moves: Vec<Vec<ChessMove>>,
    terminal: GameStatus,
    /// Default piece for the last move while its promotion is unresolved.
    pending_promotion: Option<PieceKind>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session at the standard starting position, Light to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Light)
    }

    /// Session over an arbitrary position. Castling and double-step rights
    /// follow the vacate counters the board already carries.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut session = Self {
            board,
            move_history: Vec::new(),
            turn,
            selection: None,
            legal_moves: vec![Vec::new(); 64],
            terminal: GameStatus::Ongoing,
            pending_promotion: None,
        };
        session.generate_legal_moves();
        session
    }

    /// Rebuild a session by replaying relayed moves from the starting position.
    ///
    /// A promotion without a chosen piece is resolved to the default choice
    /// unless it is the final move, which is left pending.
    pub fn replay(moves: &[WireMove]) -> ChessResult<Self> {
        let mut session = Self::new();

        for (ply, wire) in moves.iter().enumerate() {
            let rejected = || ChessErrors::ReplayRejected {
                ply,
                from: wire.from,
                to: wire.to,
            };

            let mv = session
                .legal_moves(wire.from)
                .iter()
                .find(|m| {
                    m.to == wire.to && (wire.promotion.is_none() || m.promotion == wire.promotion)
                })
                .copied()
                .ok_or_else(rejected)?;
            session.commit(mv).map_err(|_| rejected())?;

            if let Some(default_kind) = session.pending_promotion {
                let is_last = ply + 1 == moves.len();
                let resolved = match wire.promotion {
                    Some(kind) => session.resolve_promotion(kind),
                    None if !is_last => session.resolve_promotion(default_kind),
                    None => Ok(()),
                };
                resolved.map_err(|_| rejected())?;
            }
        }

        Ok(session)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[inline]
    pub fn terminal(&self) -> GameStatus {
        self.terminal
    }

    /// Why the game ended, if it has.
    pub fn game_over_reason(&self) -> Option<GameStatus> {
        match self.terminal {
            GameStatus::Ongoing => None,
            finished => Some(finished),
        }
    }

    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_history.last()
    }

    /// Legal moves of the piece on `square`; empty for other squares.
    pub fn legal_moves(&self, square: Square) -> &[ChessMove] {
        self.legal_moves
            .get(square as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_legal_moves(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.legal_moves.iter().flatten()
    }

    pub fn legal_move_count(&self) -> usize {
        self.legal_moves.iter().map(Vec::len).sum()
    }

    /// Destination of the last move while its promotion is unresolved.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
            .and(self.move_history.last())
            .map(|mv| mv.to)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board
            .king_square(self.turn)
            .is_some_and(|king| is_square_attacked(&self.board, king, self.turn))
    }

    /// Committed history in the relay's wire shape.
    pub fn wire_history(&self) -> Vec<WireMove> {
        self.move_history.iter().map(WireMove::from).collect()
    }

    /// Recompute the legal move table for the side to move, settle the
    /// terminal status and annotate the last move when it gives check.
    pub fn generate_legal_moves(&mut self) {
        self.clear_legal_moves();

        let king = self.board.king_square(self.turn);
        let last_move = self.move_history.last().copied();
        let mut any_legal = false;

        for from in self.board.squares_of(self.turn) {
            let moves = legal_moves_from(&self.board, last_move.as_ref(), from, king);
            any_legal |= !moves.is_empty();
            self.legal_moves[from as usize] = moves;
        }

        let in_check = king.is_some_and(|k| is_square_attacked(&self.board, k, self.turn));
        if in_check {
            if let Some(last) = self.move_history.last_mut() {
                last.check_square = king;
            }
        }

        if !any_legal {
            self.terminal = if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
    }

    /// Click-style selection: a friendly square selects it, a legal
    /// destination of the current selection commits that move, anything else
    /// clears the selection.
    pub fn select(&mut self, square: Square) -> ChessResult<SelectOutcome> {
        self.ensure_accepting_moves()?;

        if square <= 63 && self.board.tile(square).holds(self.turn) {
            self.selection = Some(square);
            return Ok(SelectOutcome::Selected);
        }

        match self.selection {
            Some(from) => self.attempt_move(from, square),
            None => Ok(SelectOutcome::Deselected),
        }
    }

    /// Commit the first legal move from `from` to `to` (the default
    /// promotion choice for promoting pawns).
    pub fn attempt_move(&mut self, from: Square, to: Square) -> ChessResult<SelectOutcome> {
        self.ensure_accepting_moves()?;

        let found = self.legal_moves(from).iter().find(|m| m.to == to).copied();
        match found {
            Some(mv) => Ok(SelectOutcome::Moved(self.commit(mv)?)),
            None => {
                self.selection = None;
                Ok(SelectOutcome::Deselected)
            }
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// Commit a move taken from the current legal move table.
    ///
    /// A promoting move lands as a pawn and leaves the turn with the mover
    /// until [`resolve_promotion`](Self::resolve_promotion) is called; the
    /// legal move table stays empty meanwhile.
    pub fn commit(&mut self, mv: ChessMove) -> ChessResult<MoveEffects> {
        self.ensure_accepting_moves()?;

        let listed = self.legal_moves(mv.from).iter().any(|m| m.same_move(&mv));
        if !listed {
            return Err(ChessErrors::MalformedMove {
                from: mv.from,
                to: mv.to,
                reason: "not in the legal move table",
            });
        }

        let recorded = ChessMove {
            promotion: None,
            check_square: None,
            ..mv
        };
        let effects = apply_move(&mut self.board, &recorded)?;
        self.move_history.push(recorded);
        self.selection = None;

        match mv.promotion {
            Some(default_kind) => {
                self.pending_promotion = Some(default_kind);
                self.clear_legal_moves();
            }
            None => self.advance_turn(),
        }

        Ok(effects)
    }

    /// Finalize the pending promotion as `kind` and hand the turn over.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<()> {
        if self.terminal != GameStatus::Ongoing {
            return Err(ChessErrors::TerminalStateViolation);
        }
        if self.pending_promotion.is_none() {
            return Err(ChessErrors::InvalidPromotionResolution);
        }
        if !kind.is_promotable() {
            return Err(ChessErrors::NotPromotable(kind));
        }

        let last = self
            .move_history
            .last_mut()
            .ok_or(ChessErrors::InvalidPromotionResolution)?;
        if let Some(piece) = self.board.tile_mut(last.to).piece.as_mut() {
            piece.kind = kind;
        }
        last.promotion = Some(kind);

        self.pending_promotion = None;
        self.advance_turn();
        Ok(())
    }

    /// Take back the last committed move. Returns `None` on an empty history.
    /// Accepted in a finished game, which then resumes.
    pub fn undo(&mut self) -> ChessResult<Option<ChessMove>> {
        let Some(mv) = self.move_history.last().copied() else {
            return Ok(None);
        };

        self.turn = undo_move(&mut self.board, &mv)?;
        self.move_history.pop();

        self.pending_promotion = None;
        self.selection = None;
        self.terminal = GameStatus::Ongoing;
        self.generate_legal_moves();

        Ok(Some(mv))
    }

    fn clear_legal_moves(&mut self) {
        for moves in &mut self.legal_moves {
            moves.clear();
        }
    }

    fn advance_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.generate_legal_moves();
    }

    fn ensure_accepting_moves(&self) -> ChessResult<()> {
        if self.terminal != GameStatus::Ongoing {
            return Err(ChessErrors::TerminalStateViolation);
        }
        if self.pending_promotion.is_some() {
            return Err(ChessErrors::PromotionPending);
        }
        Ok(())
    }
}
