// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (Bispos, Torres e Damas).

use super::push_piece_moves;
use crate::core::{Bitboard, Board, Move, PieceKind, Square};

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Percorre cada raio até à primeira peça (inclusive).
#[inline]
fn ray_attacks(square: Square, occupancy: Bitboard, directions: &[(i8, i8); 4]) -> Bitboard {
    let mut attacks = 0u64;
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;

    for &(df, dr) in directions {
        let (mut f, mut r) = (file + df, rank + dr);
        while (0..8).contains(&f) && (0..8).contains(&r) {
            let bb = 1u64 << (r * 8 + f);
            attacks |= bb;
            if occupancy & bb != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

/// Calcula ataques de bispo para a ocupação dada.
#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

/// Calcula ataques de torre para a ocupação dada.
#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ray_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Ataques de qualquer peça deslizante.
#[inline]
pub fn slider_attacks(piece_kind: PieceKind, square: Square, occupancy: Bitboard) -> Bitboard {
    match piece_kind {
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        _ => 0, // Não deve acontecer para esta função
    }
}

/// Função genérica para gerar lances de Bispos, Torres e Damas.
pub fn generate_sliding_moves_into(board: &Board, piece_kind: PieceKind, moves: &mut Vec<Move>) {
    let us = board.to_move;
    let our_pieces = board.pieces_of(us);
    let all_pieces = board.occupied();
    let mut our_sliding_pieces = board.pieces(piece_kind, us);

    while our_sliding_pieces != 0 {
        let from_sq = our_sliding_pieces.trailing_zeros() as Square;
        let attacks = slider_attacks(piece_kind, from_sq, all_pieces);
        push_piece_moves(board, from_sq, piece_kind, attacks & !our_pieces, moves);
        our_sliding_pieces &= our_sliding_pieces - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_attacks_empty_board() {
        assert_eq!(rook_attacks(0, 0).count_ones(), 14);
        assert_eq!(rook_attacks(27, 0).count_ones(), 14);
    }

    #[test]
    fn test_bishop_attacks_stop_at_blocker() {
        // Bispo em c1 com peça em e3: vê d2 e e3, não f4.
        let blocker = 1u64 << 20;
        let attacks = bishop_attacks(2, blocker);
        assert_ne!(attacks & (1 << 11), 0);
        assert_ne!(attacks & blocker, 0);
        assert_eq!(attacks & (1 << 29), 0);
    }

    #[test]
    fn test_queen_on_empty_board() {
        assert_eq!(queen_attacks(27, 0).count_ones(), 27);
    }
}
