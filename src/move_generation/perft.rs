use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{Action, GeneratedAction, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub drops: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Count leaf actions `depth` plies below `game_state`, tallying what the
/// leaf actions were.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_actions(game_state) {
        perft_recurse(generator, &generated, depth, 1, &mut total);
    }
    total
}

/// Per-root-action node counts, for comparing generators move by move.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Action, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generator
        .generate_legal_actions(game_state)
        .into_iter()
        .map(|generated| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, &generated, depth, 1, &mut counts);
            (generated.action, counts.nodes)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    generated: &GeneratedAction,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;

        match generated.action {
            Action::Move {
                captured, promotion, ..
            } => {
                if captured.is_some() {
                    counts.captures += 1;
                }
                if promotion.is_some() {
                    counts.promotions += 1;
                }
            }
            Action::Drop { .. } => counts.drops += 1,
        }

        let after = &generated.game_after_action;
        if after.is_check {
            counts.checks += 1;
        }
        if after.is_checkmate {
            counts.checkmates += 1;
        }
        return;
    }

    for child in generator.generate_legal_actions(&generated.game_after_action) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::{legal_actions, LegalMoveGenerator};

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft(&LegalMoveGenerator, &game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_depth_one_matches_action_list() {
        let game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &game, 1);
        assert_eq!(counts.nodes, legal_actions(&game).len());
        assert_eq!(counts.drops, 0);
        assert_eq!(counts.captures, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &game, 2);
        let total: usize = divided.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&LegalMoveGenerator, &game, 2).nodes);
    }

    #[test]
    fn leaf_drops_and_checks_are_tallied() {
        // White to move with a banked rook; the only black piece besides the
        // king is far away, so every drop is legal.
        let game = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .with_banked(PieceKind::Rook, Color::White);

        let counts = perft(&LegalMoveGenerator, &game, 1);
        // Three king steps plus 34 drops.
        assert_eq!(counts.nodes, 37);
        assert_eq!(counts.drops, 34);
        // Rook drops on row 5 or column 5 give check.
        assert_eq!(counts.checks, 10);
        assert_eq!(counts.checkmates, 0);
    }
}
