//! Terminal-oriented Unicode board renderer.
//!
//! Draws the 6×6 board with WHITE at the bottom, followed by both piece banks
//! and the side to move, for debugging and diagnostics.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f";

/// Render the board and banks to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in (0..BOARD_SIZE as u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match game_state.board.get(Position::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col + 1 < BOARD_SIZE as u8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out.push('\n');

    for color in [Color::White, Color::Black] {
        out.push_str(match color {
            Color::White => "white bank:",
            Color::Black => "black bank:",
        });
        for piece in game_state.piece_bank.pieces(color) {
            out.push(' ');
            out.push(piece_to_unicode(piece.color, piece.kind));
        }
        out.push('\n');
    }

    out.push_str(match game_state.current_player {
        Color::White => "to move: white",
        Color::Black => "to move: black",
    });
    if game_state.is_checkmate {
        out.push_str(" (checkmate)");
    } else if game_state.is_stalemate {
        out.push_str(" (stalemate)");
    } else if game_state.is_check {
        out.push_str(" (check)");
    }

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
