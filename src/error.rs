//! Tipos de erro do motor.
//!
//! Apenas as falhas recuperáveis vivem aqui: texto inválido (FEN, notação de
//! lances) e jogos gravados corrompidos. Aplicar um lance ilegal através de
//! [`Board::make_move`](crate::core::Board::make_move) é uma violação de
//! pré-condição e termina a chamada com `panic!`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// FEN mal formada ou posição impossível (ex.: sem rei)
    #[error("Invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Texto que não é um lance em notação UCI
    #[error("Invalid move notation: `{0}`")]
    InvalidNotation(String),

    /// Lance bem escrito mas fora do conjunto de lances legais
    #[error("Illegal move in this position: {0}")]
    IllegalMove(String),

    /// Jogo gravado que não reconstrói a posição registada
    #[error("Corrupted saved game: {0}")]
    CorruptSave(String),

    #[error("Failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub(crate) fn invalid_fen(fen: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
