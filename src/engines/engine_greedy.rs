use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{invalid_option, Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::evaluate;

/// One-ply opponent: plays the action with the best immediate evaluation for
/// the side to move, breaking ties with a seeded RNG.
pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    seed: u64,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if name.eq_ignore_ascii_case("Seed") {
            self.seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid_option(name, value))?;
            self.rng = StdRng::seed_from_u64(self.seed);
            return Ok(());
        }
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
        let generated = self.move_generator.generate_legal_actions(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_actions {}",
            generated.len()
        ));

        let perspective = match game_state.current_player {
            Color::White => 1,
            Color::Black => -1,
        };

        let mut best_value = i32::MIN;
        let mut best_actions = Vec::new();
        for candidate in &generated {
            let value = perspective * evaluate(&candidate.game_after_action);
            if value > best_value {
                best_value = value;
                best_actions.clear();
                best_actions.push(candidate.action);
            } else if value == best_value {
                best_actions.push(candidate.action);
            }
        }

        let Some(picked) = best_actions.choose(&mut self.rng) else {
            return Ok(out);
        };

        out.info_lines.push(format!(
            "info string greedy_engine best_value {} ties {}",
            best_value,
            best_actions.len()
        ));
        out.best_action = Some(*picked);
        out.score = Some(perspective * best_value);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;

    #[test]
    fn takes_the_hanging_queen() {
        let game = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(3, 1), PieceKind::Knight, Color::Black),
                (Position::new(3, 5), PieceKind::Queen, Color::Black),
                (Position::new(0, 5), PieceKind::Rook, Color::White),
                (Position::new(5, 0), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        let mut engine = GreedyEngine::new(7);
        let out = engine.choose_move(&game).expect("greedy runs");
        let action = out.best_action.expect("white has moves");
        assert_eq!(action.to(), Position::new(3, 5));
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game();
        let mut a = GreedyEngine::new(42);
        let mut b = GreedyEngine::new(42);
        let first = a.choose_move(&game).expect("runs").best_action;
        assert_eq!(first, b.choose_move(&game).expect("runs").best_action);

        a.choose_move(&game).expect("runs");
        a.new_game();
        assert_eq!(a.choose_move(&game).expect("runs").best_action, first);
    }

    #[test]
    fn no_action_when_mated() {
        let mated = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(5, 0), PieceKind::Rook, Color::White),
                (Position::new(4, 1), PieceKind::Rook, Color::White),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::Black,
        );
        let out = GreedyEngine::default().choose_move(&mated).expect("runs");
        assert!(out.best_action.is_none());
    }
}
