use super::*;
use crate::core::*;
use crate::engine::{Bound, TranspositionTable};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Splits the root moves across worker threads. Every worker owns a copy of
/// the board; the transposition table is the only shared state.
pub struct ParallelSearcher {
    tt: Arc<TranspositionTable>,
    evaluator: Arc<Evaluator>,
}

/// What a worker hands back after one iteration.
struct WorkerOutput {
    reports: Vec<(usize, RootMoveReport)>,
    interrupted: bool,
}

impl ParallelSearcher {
    pub fn new(tt: Arc<TranspositionTable>, evaluator: Arc<Evaluator>) -> Self {
        ParallelSearcher { tt, evaluator }
    }

    pub fn choose_best_move(&self, board: &Board, config: &SearchConfig) -> SearchOutcome {
        let start = Instant::now();
        let root_moves = board.generate_legal_moves();
        if root_moves.is_empty() {
            return SearchOutcome::GameOver(GameStatus::of(board));
        }

        let max_depth = config.max_depth.max(1);

        // A deep enough exact result for this position is reused as is.
        if let Some(entry) = self.tt.probe(board.zobrist_hash) {
            if entry.bound == Bound::Exact && entry.depth >= max_depth {
                if let Some(mv) = entry.best_move.and_then(|key| root_moves.iter().copied().find(|mv| key.matches(mv))) {
                    debug!(%mv, depth = entry.depth, "root position answered from the transposition table");
                    return SearchOutcome::BestMove(SearchResult {
                        best_move: mv,
                        score: entry.score,
                        depth: entry.depth,
                        nodes: 0,
                        elapsed: start.elapsed(),
                        root_moves: Vec::new(),
                    });
                }
            }
        }

        self.tt.new_search();
        let deadline = config.time_budget.map(|budget| start + budget);
        let workers = config.workers.clamp(1, root_moves.len());

        let mut completed: Option<(u8, RootMoveReport, Vec<RootMoveReport>)> = None;
        let mut total_nodes = 0;

        for depth in 1..=max_depth {
            // The first iteration always runs to completion.
            let iteration_deadline = if depth == 1 { None } else { deadline };
            if iteration_deadline.is_some_and(|d| Instant::now() >= d) {
                break;
            }

            let (reports, interrupted, nodes) = self.search_iteration(board, &root_moves, depth, workers, iteration_deadline);
            total_nodes += nodes;
            if interrupted {
                warn!(depth, "deadline reached, discarding unfinished iteration");
                break;
            }

            let Some(best) = select_best(&reports) else {
                warn!(depth, "no root move survived the iteration");
                break;
            };
            debug!(depth, best_move = %best.mv, score = best.score, nodes, "iteration complete");
            self.tt.store(board.zobrist_hash, depth, best.score, Bound::Exact, Some(&best.mv));
            completed = Some((depth, best, reports));

            if is_mate_score(best.score) {
                break;
            }
        }

        let elapsed = start.elapsed();
        let result = match completed {
            Some((depth, best, reports)) => {
                SearchResult { best_move: best.mv, score: best.score, depth, nodes: total_nodes, elapsed, root_moves: reports }
            }
            None => {
                // Every root search failed; fall back to the first legal move.
                warn!("search produced no result, playing the first legal move");
                SearchResult { best_move: root_moves[0], score: 0, depth: 0, nodes: total_nodes, elapsed, root_moves: Vec::new() }
            }
        };
        SearchOutcome::BestMove(result)
    }

    /// Runs one fixed-depth iteration. Root move `i` goes to worker `i % workers`.
    /// Returns the reports sorted by generation index, whether the deadline cut
    /// the iteration short, and the node count.
    fn search_iteration(
        &self,
        board: &Board,
        root_moves: &[Move],
        depth: u8,
        workers: usize,
        deadline: Option<Instant>,
    ) -> (Vec<RootMoveReport>, bool, u64) {
        let stop = AtomicBool::new(false);
        let tt: &TranspositionTable = &self.tt;
        let evaluator: &Evaluator = &self.evaluator;

        let outputs = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|worker_id| {
                    let stop = &stop;
                    let board = *board;
                    s.spawn(move |_| search_worker(worker_id, workers, board, root_moves, depth, tt, evaluator, deadline, stop))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .filter_map(|(worker_id, handle)| match handle.join() {
                    Ok(output) => Some(output),
                    Err(_) => {
                        warn!(worker_id, "worker thread died, its root moves are excluded");
                        None
                    }
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|_| {
            warn!("worker scope failed");
            Vec::new()
        });

        let interrupted = outputs.iter().any(|output| output.interrupted);
        let mut indexed: Vec<(usize, RootMoveReport)> = outputs.into_iter().flat_map(|output| output.reports).collect();
        indexed.sort_by_key(|(index, _)| *index);
        let nodes = indexed.iter().map(|(_, report)| report.nodes).sum();
        let reports = indexed.into_iter().map(|(_, report)| report).collect();
        (reports, interrupted, nodes)
    }
}

#[allow(clippy::too_many_arguments)]
fn search_worker(
    worker_id: usize,
    workers: usize,
    board: Board,
    root_moves: &[Move],
    depth: u8,
    tt: &TranspositionTable,
    evaluator: &Evaluator,
    deadline: Option<Instant>,
    stop: &AtomicBool,
) -> WorkerOutput {
    let mut searcher = Searcher::new(board, tt, evaluator);
    let mut output = WorkerOutput { reports: Vec::new(), interrupted: false };

    for index in (worker_id..root_moves.len()).step_by(workers) {
        if stop.load(Ordering::Relaxed) || deadline.is_some_and(|d| Instant::now() >= d) {
            stop.store(true, Ordering::Relaxed);
            output.interrupted = true;
            break;
        }

        let mv = root_moves[index];
        let nodes_before = searcher.nodes();
        match catch_unwind(AssertUnwindSafe(|| searcher.search_root_move(mv, depth))) {
            Ok(score) => output.reports.push((
                index,
                RootMoveReport { mv, score, nodes: searcher.nodes() - nodes_before },
            )),
            Err(_) => {
                warn!(worker_id, %mv, "root move search panicked, move excluded");
                // The board may have been left mid-move.
                searcher = Searcher::new(board, tt, evaluator);
            }
        }
    }
    output
}

/// Highest score wins; ties go to the earliest move in generation order.
pub fn select_best(reports: &[RootMoveReport]) -> Option<RootMoveReport> {
    reports.iter().copied().fold(None, |best, report| match best {
        Some(b) if b.score >= report.score => Some(b),
        _ => Some(report),
    })
}

/// One-shot search with a fresh table and the default evaluation.
pub fn choose_best_move(board: &Board, depth_budget: u8, worker_count: usize) -> SearchOutcome {
    let searcher = ParallelSearcher::new(
        Arc::new(TranspositionTable::new(DEFAULT_TT_MB)),
        Arc::new(Evaluator::default()),
    );
    let config = SearchConfig {
        max_depth: depth_budget,
        workers: worker_count,
        time_budget: None,
        tt_size_mb: DEFAULT_TT_MB,
    };
    searcher.choose_best_move(board, &config)
}

/// Same as [`choose_best_move`] with a time budget checked between root moves.
pub fn choose_best_move_timed(board: &Board, depth_budget: u8, worker_count: usize, budget: Duration) -> SearchOutcome {
    let searcher = ParallelSearcher::new(
        Arc::new(TranspositionTable::new(DEFAULT_TT_MB)),
        Arc::new(Evaluator::default()),
    );
    let config = SearchConfig {
        max_depth: depth_budget,
        workers: worker_count,
        time_budget: Some(budget),
        tt_size_mb: DEFAULT_TT_MB,
    };
    searcher.choose_best_move(board, &config)
}
