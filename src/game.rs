// Ficheiro: src/game.rs
// Descrição: Sessão de jogo: histórico de lances, desfazer, repetições e gravação em JSON.

use crate::core::*;
use crate::error::{EngineError, EngineResult};
use crate::search::{DrawReason, GameStatus};
use serde::{Deserialize, Serialize};

/// Formato do ficheiro de jogo gravado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub start_fen: String,
    /// Lances em notação UCI, pela ordem jogada.
    pub moves: Vec<String>,
    /// Posição final, usada para validar a reconstrução.
    pub fen: String,
}

#[derive(Debug, Clone)]
pub struct Game {
    start: Board,
    board: Board,
    history: Vec<UndoInfo>,
    // Hash de cada posição já vista, incluindo a inicial.
    positions: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        Game {
            start: board,
            board,
            history: Vec::new(),
            positions: vec![board.zobrist_hash],
        }
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|undo| undo.mv)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|undo| undo.mv)
    }

    /// Joga um lance, validando-o contra os lances legais.
    pub fn play(&mut self, mv: Move) -> EngineResult<()> {
        if !self.board.is_legal_move(mv) {
            return Err(EngineError::IllegalMove(mv.to_string()));
        }
        let undo = self.board.make_move(mv);
        self.history.push(undo);
        self.positions.push(self.board.zobrist_hash);
        Ok(())
    }

    pub fn play_uci(&mut self, text: &str) -> EngineResult<Move> {
        let mv = self.board.parse_move(text)?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Desfaz o último lance, se houver.
    pub fn undo(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        self.positions.pop();
        self.board.undo_move(undo);
        Some(undo.mv)
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.zobrist_hash;
        self.positions.iter().filter(|&&hash| hash == current).count() >= 3
    }

    pub fn status(&self) -> GameStatus {
        match GameStatus::of(&self.board) {
            GameStatus::Ongoing if self.is_threefold_repetition() => GameStatus::Draw(DrawReason::Threefold),
            status => status,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Stalemate | GameStatus::Draw(_))
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            start_fen: self.start.to_fen(),
            moves: self.moves().map(|mv| mv.to_uci()).collect(),
            fen: self.board.to_fen(),
        }
    }

    /// Reconstrói o jogo repetindo os lances a partir da posição inicial.
    pub fn from_saved(saved: &SavedGame) -> EngineResult<Self> {
        let mut game = Game::from_fen(&saved.start_fen)?;
        for (index, text) in saved.moves.iter().enumerate() {
            game.play_uci(text).map_err(|err| {
                EngineError::CorruptSave(format!("move {} (`{}`): {}", index + 1, text, err))
            })?;
        }
        let replayed = game.board.to_fen();
        if replayed != saved.fen.trim() {
            return Err(EngineError::CorruptSave(format!(
                "replayed position `{}` does not match saved position `{}`",
                replayed, saved.fen
            )));
        }
        Ok(game)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_saved())?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let saved: SavedGame = serde_json::from_str(json)?;
        Self::from_saved(&saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_undo() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        game.play_uci("e7e5").unwrap();
        assert_eq!(game.moves().count(), 2);
        assert_eq!(game.undo().map(|mv| mv.to_string()), Some("e7e5".to_string()));
        assert_eq!(game.undo().map(|mv| mv.to_string()), Some("e2e4".to_string()));
        assert_eq!(game.undo(), None);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_threefold_repetition() {
        let mut game = Game::new();
        for _ in 0..2 {
            for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                game.play_uci(mv).unwrap();
            }
        }
        assert!(game.is_threefold_repetition());
        assert_eq!(game.status(), GameStatus::Draw(DrawReason::Threefold));
        game.undo();
        assert!(!game.is_threefold_repetition());
    }

    #[test]
    fn test_rejects_illegal_input() {
        let mut game = Game::new();
        assert!(matches!(game.play_uci("e2e5"), Err(EngineError::IllegalMove(_))));
        assert!(matches!(game.play_uci("hello"), Err(EngineError::InvalidNotation(_))));
        assert_eq!(game.moves().count(), 0);
    }
}
