use super::{order_moves, Evaluator, INF, MATE_SCORE};
use crate::core::*;
use crate::engine::{score_from_tt, score_to_tt, Bound, TranspositionTable};

/// Negamax com poda alpha-beta sobre um tabuleiro privado.
/// Cada worker tem o seu; só a TT é partilhada.
pub struct Searcher<'a> {
    board: Board,
    tt: &'a TranspositionTable,
    evaluator: &'a Evaluator,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(board: Board, tt: &'a TranspositionTable, evaluator: &'a Evaluator) -> Self {
        Searcher { board, tt, evaluator, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pesquisa um lance de raiz a `depth` (total, incluindo o próprio lance)
    /// com janela completa. Devolve o score do ponto de vista de quem joga na raiz.
    pub fn search_root_move(&mut self, mv: Move, depth: u8) -> i32 {
        #[cfg(test)]
        let root_hash = self.board.zobrist_hash;
        let undo = self.board.make_move(mv);
        // Falha simulada a meio do lance: o tabuleiro fica por desfazer.
        #[cfg(test)]
        failpoint::check(root_hash, mv);
        let score = -self.negamax(depth.saturating_sub(1), -INF, INF, 1);
        self.board.undo_move(undo);
        score
    }

    /// Pesquisa a posição atual a `depth` meios-lances.
    pub fn search(&mut self, depth: u8) -> i32 {
        self.negamax(depth, -INF, INF, 0)
    }

    pub fn negamax(&mut self, depth: u8, mut alpha: i32, beta: i32, ply: i32) -> i32 {
        self.nodes += 1;

        // Material insuficiente: nem há mate possível
        if ply > 0 && self.board.is_draw_by_insufficient_material() {
            return 0;
        }

        let hash = self.board.zobrist_hash;
        let alpha_orig = alpha;
        let mut tt_move = None;

        // Probe TT
        if let Some(entry) = self.tt.probe(hash) {
            tt_move = entry.best_move;
            if entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                match entry.bound {
                    Bound::Exact => return score,
                    Bound::Lower if score >= beta => return score,
                    Bound::Upper if score <= alpha => return score,
                    _ => {}
                }
            }
        }

        let mut moves = self.board.generate_legal_moves();
        if moves.is_empty() {
            return if self.board.in_check() {
                -MATE_SCORE + ply // Xeque-mate
            } else {
                0 // Afogamento
            };
        }

        // O mate tem prioridade sobre a regra dos 50 lances
        if ply > 0 && self.board.is_draw_by_50_moves() {
            return 0;
        }

        if depth == 0 {
            return self.evaluator.evaluate(&self.board);
        }

        order_moves(&mut moves, tt_move);

        let mut best_score = -INF;
        let mut best_move = moves[0];

        for mv in moves {
            let undo = self.board.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, ply + 1);
            self.board.undo_move(undo);

            // Só um score estritamente melhor troca de lance
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break; // Poda beta
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(hash, depth, score_to_tt(best_score, ply), bound, Some(&best_move));

        best_score
    }
}

/// Lance de raiz que entra em pânico ao ser pesquisado, para testar a
/// recuperação dos workers.
#[cfg(test)]
pub(crate) mod failpoint {
    use crate::core::Move;
    use std::sync::Mutex;

    static ROOT_MOVE: Mutex<Option<(u64, Move)>> = Mutex::new(None);

    fn slot() -> std::sync::MutexGuard<'static, Option<(u64, Move)>> {
        ROOT_MOVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn arm(root_hash: u64, mv: Move) {
        *slot() = Some((root_hash, mv));
    }

    pub fn disarm() {
        *slot() = None;
    }

    pub fn check(root_hash: u64, mv: Move) {
        let armed = *slot();
        if armed == Some((root_hash, mv)) {
            panic!("simulated failure searching {}", mv);
        }
    }
}
