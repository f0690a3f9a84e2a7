//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Scores are integers from WHITE's point of view: positive favours WHITE.
//! Checkmate scores exactly `±CHECKMATE_SCORE` (negative when WHITE is the side
//! mated), stalemate scores zero, and every other position stays well inside
//! that range so a mate always dominates positional terms.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::legal_destinations;

pub const CHECKMATE_SCORE: i32 = 10_000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from WHITE's perspective.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Base value of one piece of `kind`. Kings are never captured and carry no
/// material value; king danger is left to the checkmate score.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
const fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// `Some(score)` when the side to move has no legal action left.
#[inline]
pub fn terminal_score(game_state: &GameState) -> Option<i32> {
    if game_state.is_checkmate {
        Some(-sign(game_state.current_player) * CHECKMATE_SCORE)
    } else if game_state.is_stalemate {
        Some(STALEMATE_SCORE)
    } else {
        None
    }
}

/// Default evaluation used by the search.
#[inline]
pub fn evaluate(game_state: &GameState) -> i32 {
    PositionalScorer.score(game_state)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    /// Board material plus banked material, WHITE minus BLACK. Banked pieces
    /// count in full since they can be dropped back in.
    pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        let on_board: i32 = game_state
            .board
            .iter()
            .map(|(_, piece)| sign(piece.color) * piece_value(piece.kind))
            .sum();

        let banked: i32 = [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| game_state.piece_bank.pieces(color))
            .map(|piece| sign(piece.color) * piece_value(piece.kind))
            .sum();

        on_board + banked
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        terminal_score(game_state)
            .unwrap_or_else(|| Self::material_balance_white_minus_black(game_state))
    }
}

// Piece-square tables from the owner's side: row 0 is the owner's back rank.
// BLACK looks squares up rotated by 180 degrees (`35 - square`), matching the
// point-symmetric starting layout.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 36] = [
      0,   0,   0,   0,   0,   0,
      5,   5,   0,   0,   5,   5,
     10,  10,  20,  20,  10,  10,
     20,  20,  30,  30,  20,  20,
     50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 36] = [
    -50, -30, -20, -20, -30, -50,
    -30,   0,  10,  10,   0, -30,
    -20,  10,  20,  20,  10, -20,
    -20,  10,  20,  20,  10, -20,
    -30,   0,  10,  10,   0, -30,
    -50, -30, -20, -20, -30, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 36] = [
    -20, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   5, -10,
    -10,  10,  10,  10,  10, -10,
    -10,   5,  10,  10,   5, -10,
    -10,   0,   5,   5,   0, -10,
    -20, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 36] = [
      0,   0,   5,   5,   0,   0,
     -5,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 36] = [
    -20, -10,  -5,  -5, -10, -20,
    -10,   0,   5,   5,   0, -10,
     -5,   5,   5,   5,   5,  -5,
     -5,   5,   5,   5,   5,  -5,
    -10,   0,   5,   5,   0, -10,
    -20, -10,  -5,  -5, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 36] = [
     20,  30,  10,  10,  30,  20,
      0,   0, -10, -10,   0,   0,
    -20, -30, -30, -30, -30, -20,
    -30, -40, -40, -40, -40, -30,
    -40, -50, -50, -50, -50, -40,
    -50, -50, -50, -50, -50, -50,
];

#[inline]
fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let idx = match piece.color {
        Color::White => square as usize,
        Color::Black => 35 - square as usize,
    };
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[idx]
}

#[inline]
const fn is_inner_square(position: Position) -> bool {
    position.row >= 1 && position.row <= 4 && position.col >= 1 && position.col <= 4
}

/// Material plus piece-square, mobility, centre-control, and king-safety terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Piece-square values count at half weight.
    const PIECE_SQUARE_DIVISOR: i32 = 2;
    /// Per legal destination of a board piece.
    const MOBILITY_WEIGHT: i32 = 3;
    /// Per non-king piece standing on the inner 4×4.
    const CENTER_BONUS: i32 = 10;
    /// Per opposing piece attacking the king.
    const KING_ATTACKER_PENALTY: i32 = 40;

    fn positional_term(game_state: &GameState) -> i32 {
        let board = &game_state.board;
        let mut score = 0i32;

        for (pos, piece) in board.iter() {
            let mut term = piece_square_bonus(piece, pos.square()) / Self::PIECE_SQUARE_DIVISOR;

            let mobility = legal_destinations(board, pos, piece).len() as i32;
            term += mobility * Self::MOBILITY_WEIGHT;

            if piece.kind != PieceKind::King && is_inner_square(pos) {
                term += Self::CENTER_BONUS;
            }

            score += sign(piece.color) * term;
        }

        score
    }

    fn king_safety_term(game_state: &GameState) -> i32 {
        let board = &game_state.board;
        [Color::White, Color::Black]
            .into_iter()
            .filter_map(|color| board.find_king(color).map(|king| (color, king)))
            .map(|(color, king)| {
                let attackers = attackers_to_square(board, king, color.opposite()).len() as i32;
                -sign(color) * attackers * Self::KING_ATTACKER_PENALTY
            })
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(terminal) = terminal_score(game_state) {
            return terminal;
        }
        let material = MaterialScorer::material_balance_white_minus_black(game_state);
        material + Self::positional_term(game_state) + Self::king_safety_term(game_state)
    }
}
