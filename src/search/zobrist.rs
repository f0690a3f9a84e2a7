//! Zobrist hashing of board, piece banks, and side to move.
//!
//! Keys come from a fixed-seed `StdRng`, so hashes are identical across runs.
//! Piece ids are not hashed; two positions with the same kinds, colors, squares,
//! bank contents, and turn share a key.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_rules::NUM_SQUARES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ALL_PIECE_KINDS;

const ZOBRIST_SEED: u64 = 0x6D69_686F_7573_6536;

/// Bank counts at or above this share the last key. A side can never hold
/// that many pieces of one kind on a 6×6 board with ten starting pieces.
const BANK_COUNT_SLOTS: usize = 16;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; NUM_SQUARES]; 6]; 2],
    side_to_move: u64,
    bank_count: [[[u64; BANK_COUNT_SLOTS]; 6]; 2],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; NUM_SQUARES]; 6]; 2];
    for color in &mut piece_square {
        for kind in color {
            for sq in kind {
                *sq = rng.random();
            }
        }
    }

    let side_to_move = rng.random();

    let mut bank_count = [[[0u64; BANK_COUNT_SLOTS]; 6]; 2];
    for color in &mut bank_count {
        for kind in color {
            // Slot 0 (empty) contributes nothing.
            for key in kind.iter_mut().skip(1) {
                *key = rng.random();
            }
        }
    }

    ZobristTables {
        piece_square,
        side_to_move,
        bank_count,
    }
}

#[inline]
pub fn piece_square_key(color: Color, kind: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][kind.index()][square as usize]
}

/// Key for `color` holding exactly `count` banked pieces of `kind`.
#[inline]
pub fn bank_count_key(color: Color, kind: PieceKind, count: usize) -> u64 {
    tables().bank_count[color.index()][kind.index()][count.min(BANK_COUNT_SLOTS - 1)]
}

/// Side-to-move toggle (xor in when BLACK is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for (pos, piece) in game_state.board.iter() {
        key ^= piece_square_key(piece.color, piece.kind, pos.square());
    }

    for color in [Color::White, Color::Black] {
        for kind in ALL_PIECE_KINDS {
            let count = game_state.piece_bank.count(color, kind);
            key ^= bank_count_key(color, kind, count);
        }
    }

    if game_state.current_player == Color::Black {
        key ^= side_to_move_key();
    }

    key
}
