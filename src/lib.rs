// Roque - motor de xadrez: geração de lances, busca alpha-beta paralela e TT partilhada

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod moves;
pub mod search;

pub use crate::core::*;
pub use engine::{perft, perft_divide, Engine, TranspositionTable};
pub use error::{EngineError, EngineResult};
pub use game::{Game, SavedGame};
pub use search::{
    choose_best_move, Difficulty, DrawReason, EvalWeights, Evaluator, GameStatus, RootMoveReport, SearchConfig,
    SearchOutcome, SearchResult, MATE_SCORE,
};
