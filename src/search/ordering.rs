use crate::core::*;
use crate::engine::MoveKey;

/// Tabela MVV-LVA (Most Valuable Victim - Least Valuable Attacker), indexada [vítima][atacante].
const fn generate_mvv_lva() -> [[i32; 6]; 6] {
    let piece_values = [100, 320, 330, 500, 900, 20000]; // P, N, B, R, Q, K
    let mut table = [[0; 6]; 6];
    let mut victim = 0;
    while victim < 6 {
        let mut attacker = 0;
        while attacker < 6 {
            table[victim][attacker] = piece_values[victim] * 10 - piece_values[attacker] / 10;
            attacker += 1;
        }
        victim += 1;
    }
    table
}

static MVV_LVA: [[i32; 6]; 6] = generate_mvv_lva();

const TT_MOVE_SCORE: i32 = 10_000_000;
const PROMOTION_SCORE: i32 = 5_000_000;
const CAPTURE_SCORE: i32 = 1_000_000;

#[inline]
pub fn mvv_lva_score(attacker: PieceKind, victim: PieceKind) -> i32 {
    MVV_LVA[victim.index()][attacker.index()]
}

/// Pontua um movimento para ordenação (quanto maior, melhor)
fn score_move(mv: &Move, tt_move: Option<MoveKey>) -> i32 {
    // 1. TT Move (prioridade máxima)
    if tt_move.is_some_and(|key| key.matches(mv)) {
        return TT_MOVE_SCORE;
    }

    // 2. Promoções, com a dama primeiro
    if let Some(promotion) = mv.promotion() {
        let capture_bonus = mv.captured().map_or(0, |victim| mvv_lva_score(PieceKind::Pawn, victim));
        return PROMOTION_SCORE + promotion.value() * 100 + capture_bonus;
    }

    // 3. Capturas (MVV-LVA)
    if let Some(victim) = mv.captured() {
        return CAPTURE_SCORE + mvv_lva_score(mv.piece, victim);
    }

    // 4. Lances quietos: ordem de geração
    0
}

/// Ordena os lances para maximizar podas Alpha-Beta.
/// A ordenação é estável: empates mantêm a ordem de geração.
pub fn order_moves(moves: &mut [Move], tt_move: Option<MoveKey>) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score_move(mv, tt_move)));
}
