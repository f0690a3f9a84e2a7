//! Complete, immutable-per-call game state.
//!
//! `GameState` is the value the rules engine consumes and produces. It stores
//! the board, both piece banks, the side to move, the move history, and the
//! check / checkmate / stalemate flags for the side to move. Rules operations
//! never mutate a state in place; they return a fresh one.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;
use crate::game_state::piece_bank::PieceBank;
use crate::move_generation::legal_move_status::refresh_status;
use crate::moves::move_descriptions::MoveRecord;
use crate::search::zobrist::compute_zobrist_key;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub move_history: Vec<MoveRecord>,
    pub piece_bank: PieceBank,

    // --- Status of `current_player` ---
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,

    pub last_move: Option<MoveRecord>,

    // --- Identity / hashing ---
    pub next_piece_id: u32,
    pub zobrist_key: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            current_player: Color::White,
            move_history: Vec::new(),
            piece_bank: PieceBank::default(),

            is_check: false,
            is_checkmate: false,
            is_stalemate: false,

            last_move: None,

            next_piece_id: 1,
            zobrist_key: 0,
        }
    }
}

impl GameState {
    /// Empty board, empty banks, White to move. Not a playable position until
    /// both kings are placed.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The fixed starting position. Identical on every call.
    pub fn new_game() -> Self {
        Self::from_pieces(&STARTING_LAYOUT, Color::White)
    }

    /// Build a position from `(square, kind, color)` placements with fresh ids,
    /// then compute the status flags and hash for `current_player`.
    ///
    /// Placements outside the board are ignored; a later placement on the same
    /// square replaces an earlier one.
    pub fn from_pieces(placements: &[(Position, PieceKind, Color)], current_player: Color) -> Self {
        let mut state = Self::new_empty();
        state.current_player = current_player;
        for &(pos, kind, color) in placements {
            if !pos.is_on_board() {
                continue;
            }
            let id = state.mint_piece_id();
            state.board.set(pos, Some(Piece::new(id, kind, color)));
        }
        state.finish_setup();
        state
    }

    /// Add a piece of `kind` to `color`'s bank, returning the updated state.
    /// Intended for setting up positions before play.
    pub fn with_banked(mut self, kind: PieceKind, color: Color) -> Self {
        let id = self.mint_piece_id();
        let mut piece = Piece::new(id, kind, color);
        piece.has_moved = true;
        self.piece_bank.push(piece);
        self.finish_setup();
        self
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if position.is_on_board() {
            self.board.get(position)
        } else {
            None
        }
    }

    /// True when the side to move has no legal action left.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate || self.is_stalemate
    }

    /// The winner, if the side to move has been checkmated.
    pub fn winner(&self) -> Option<Color> {
        if self.is_checkmate {
            Some(self.current_player.opposite())
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn mint_piece_id(&mut self) -> PieceId {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        id
    }

    fn finish_setup(&mut self) {
        refresh_status(self);
        self.zobrist_key = compute_zobrist_key(self);
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_is_reproducible() {
        let a = GameState::new_game();
        let b = GameState::new_game();
        assert_eq!(a.board, b.board);
        assert_eq!(a.zobrist_key, b.zobrist_key);
        assert_eq!(a.current_player, Color::White);
        assert!(a.piece_bank.is_empty(Color::White));
        assert!(a.piece_bank.is_empty(Color::Black));
        assert!(!a.is_check && !a.is_checkmate && !a.is_stalemate);
    }

    #[test]
    fn new_game_has_one_king_per_side() {
        let game = GameState::new_game();
        for color in [Color::White, Color::Black] {
            let kings = game
                .board
                .pieces_of(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            assert_eq!(kings, 1);
        }
        assert_eq!(game.board.find_king(Color::White), Some(Position::new(0, 0)));
        assert_eq!(game.board.find_king(Color::Black), Some(Position::new(5, 5)));
    }

    #[test]
    fn piece_ids_are_unique() {
        let game = GameState::new_game();
        let mut ids: Vec<PieceId> = game.board.iter().map(|(_, p)| p.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn piece_at_off_board_is_none() {
        let game = GameState::new_game();
        assert!(game.piece_at(Position::new(6, 0)).is_none());
    }
}
