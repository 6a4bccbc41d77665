//! Interface estreita usada pelas camadas de jogo (terminal, UCI).

use crate::core::{Board, Move};
use crate::error::EngineResult;
use crate::game::Game;
use crate::search::{Difficulty, SearchOutcome};
use crate::Engine;

/// Posição inicial padrão.
pub fn new_game() -> Board {
    Board::new()
}

pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.generate_legal_moves()
}

/// Devolve a posição depois de `mv`.
///
/// # Panics
///
/// Se `mv` não for legal na posição.
pub fn apply(board: &Board, mv: Move) -> Board {
    assert!(board.is_legal_move(mv), "apply: lance ilegal {}", mv);
    let mut next = *board;
    next.make_move(mv);
    next
}

/// Busca com uma TT nova. Para manter a TT entre lances, usar [`Engine`].
pub fn best_move(board: &Board, difficulty: Difficulty) -> SearchOutcome {
    let config = difficulty.config();
    Engine::with_evaluator(Default::default(), config.tt_size_mb).search(board, &config)
}

pub fn is_checkmate(board: &Board) -> bool {
    board.is_checkmate()
}

pub fn is_stalemate(board: &Board) -> bool {
    board.is_stalemate()
}

/// Regra dos 50 lances, material insuficiente ou afogamento.
/// A repetição tripla precisa do histórico: ver [`Game::is_draw`].
pub fn is_draw(board: &Board) -> bool {
    board.is_draw()
}

/// Carrega uma posição a partir de FEN ou de um jogo gravado (JSON).
pub fn from_serialized(text: &str) -> EngineResult<Board> {
    let text = text.trim();
    if text.starts_with('{') {
        Ok(*Game::from_json(text)?.board())
    } else {
        Board::from_fen(text)
    }
}

pub fn to_serialized(game: &Game) -> EngineResult<String> {
    game.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_apply_returns_new_position() {
        let board = new_game();
        let mv = legal_moves(&board)[0];
        let next = apply(&board, mv);
        assert_ne!(next, board);
        assert_eq!(board, new_game());
    }

    #[test]
    #[should_panic(expected = "lance ilegal")]
    fn test_apply_panics_on_illegal_move() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
        // Roque sem direito de roque.
        let castle = Move::new(4, 6, crate::core::PieceKind::King, crate::core::MoveKind::Castle(crate::core::CastleSide::King));
        apply(&board, castle);
    }

    #[test]
    fn test_from_serialized_fen_and_json() {
        let fen = "4k3/8/8/8/8/8/8/4K2R w K - 0 1";
        assert_eq!(from_serialized(fen).unwrap().to_fen(), fen);

        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        let json = to_serialized(&game).unwrap();
        assert_eq!(from_serialized(&json).unwrap(), *game.board());

        assert!(matches!(from_serialized("{ broken"), Err(EngineError::Decode(_))));
        assert!(matches!(from_serialized("garbage"), Err(EngineError::InvalidFen { .. })));
    }

    #[test]
    fn test_terminal_queries() {
        let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(is_stalemate(&stalemate));
        assert!(is_draw(&stalemate));
        assert!(!is_checkmate(&stalemate));
    }
}
