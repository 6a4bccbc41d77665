pub mod perft;
pub mod tt;

pub use perft::*;
pub use tt::*;

use crate::core::Board;
use crate::search::{Difficulty, Evaluator, ParallelSearcher, SearchConfig, SearchOutcome, DEFAULT_TT_MB};
use std::sync::Arc;
use tracing::info;

/// Fachada do motor: mantém a TT e o avaliador entre chamadas.
pub struct Engine {
    tt: Arc<TranspositionTable>,
    evaluator: Arc<Evaluator>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::default(), DEFAULT_TT_MB)
    }

    pub fn with_evaluator(evaluator: Evaluator, tt_size_mb: usize) -> Self {
        Engine {
            tt: Arc::new(TranspositionTable::new(tt_size_mb)),
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn tt(&self) -> &Arc<TranspositionTable> {
        &self.tt
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Esquece tudo o que foi aprendido (nova partida).
    pub fn new_game(&self) {
        self.tt.clear();
    }

    pub fn best_move(&self, board: &Board, difficulty: Difficulty) -> SearchOutcome {
        self.search(board, &difficulty.config())
    }

    pub fn search(&self, board: &Board, config: &SearchConfig) -> SearchOutcome {
        let searcher = ParallelSearcher::new(Arc::clone(&self.tt), Arc::clone(&self.evaluator));
        let outcome = searcher.choose_best_move(board, config);
        if let SearchOutcome::BestMove(result) = &outcome {
            info!(
                best_move = %result.best_move,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "search finished"
            );
        }
        outcome
    }
}
