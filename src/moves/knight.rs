// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use super::push_piece_moves;
use crate::core::{Bitboard, Board, Move, PieceKind, Square};

/// Gera a tabela de ataques de cavalo para todas as 64 casas.
const fn generate_knight_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Array com os possíveis deslocamentos do cavalo
        let knight_moves = [15, 17, 6, 10, -15, -17, -6, -10];
        let mut i = 0;

        while i < knight_moves.len() {
            let target = s + knight_moves[i];

            // Verifica se o movimento está dentro do tabuleiro
            if target >= 0 && target < 64 {
                // Um salto de cavalo nunca muda mais do que 2 colunas (evita wrap-around)
                let file_diff = (target % 8 - s % 8).abs();
                if file_diff <= 2 {
                    attack_bb |= 1u64 << target;
                }
            }
            i += 1;
        }

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de cavalo para cada casa do tabuleiro.
static KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks_table();

/// Obtém o bitboard de ataque para um cavalo numa dada casa.
#[inline(always)]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Gera todos os lances pseudo-legais para os cavalos do jogador atual.
pub fn generate_knight_moves_into(board: &Board, moves: &mut Vec<Move>) {
    let our_pieces = board.pieces_of(board.to_move);
    let mut our_knights = board.knights & our_pieces;

    while our_knights != 0 {
        let from_sq = our_knights.trailing_zeros() as Square;
        push_piece_moves(board, from_sq, PieceKind::Knight, knight_attacks(from_sq) & !our_pieces, moves);
        our_knights &= our_knights - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks_corners_and_center() {
        assert_eq!(knight_attacks(0).count_ones(), 2); // a1: b3, c2
        assert_eq!(knight_attacks(0), (1 << 17) | (1 << 10));
        assert_eq!(knight_attacks(63).count_ones(), 2);
        assert_eq!(knight_attacks(27).count_ones(), 8); // d4
        // g1 não pode saltar para a3 (wrap-around)
        assert_eq!(knight_attacks(6) & (1 << 16), 0);
    }

    #[test]
    fn test_start_position_knight_moves() {
        let mut moves = Vec::new();
        generate_knight_moves_into(&Board::new(), &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.piece == PieceKind::Knight && mv.is_quiet()));
    }
}
