// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei, incluindo o roque.

use super::push_piece_moves;
use crate::core::*;

/// Gera a tabela de ataques de rei para todas as 64 casas.
const fn generate_king_attacks_table() -> [Bitboard; 64] {
    let mut attacks = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let king_pos = 1u64 << square;
        let mut attack_bb = 0u64;
        let s = square as i8;

        // Movimentos de um passo em todas as 8 direções.
        if s % 8 > 0 { attack_bb |= king_pos >> 1; } // Esquerda
        if s % 8 < 7 { attack_bb |= king_pos << 1; } // Direita
        if s / 8 > 0 { attack_bb |= king_pos >> 8; } // Baixo
        if s / 8 < 7 { attack_bb |= king_pos << 8; } // Cima
        if s % 8 > 0 && s / 8 > 0 { attack_bb |= king_pos >> 9; } // Baixo-Esquerda
        if s % 8 < 7 && s / 8 > 0 { attack_bb |= king_pos >> 7; } // Baixo-Direita
        if s % 8 > 0 && s / 8 < 7 { attack_bb |= king_pos << 7; } // Cima-Esquerda
        if s % 8 < 7 && s / 8 < 7 { attack_bb |= king_pos << 9; } // Cima-Direita

        attacks[square] = attack_bb;
        square += 1;
    }

    attacks
}

/// Tabela pré-calculada de ataques de rei para cada casa do tabuleiro.
static KING_ATTACKS: [Bitboard; 64] = generate_king_attacks_table();

/// Obtém o bitboard de ataque para um rei numa dada casa.
#[inline(always)]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// Dados de um roque: direito, casas que têm de estar vazias, casas que o rei
/// atravessa (incluindo a de partida e a de chegada) e destino do rei.
struct CastleRule {
    side: CastleSide,
    right: u8,
    empty: Bitboard,
    king_path: [Square; 3],
    king_to: Square,
}

const WHITE_CASTLES: [CastleRule; 2] = [
    CastleRule { side: CastleSide::King, right: WHITE_KINGSIDE, empty: 0x60, king_path: [4, 5, 6], king_to: 6 },
    CastleRule { side: CastleSide::Queen, right: WHITE_QUEENSIDE, empty: 0x0e, king_path: [4, 3, 2], king_to: 2 },
];

const BLACK_CASTLES: [CastleRule; 2] = [
    CastleRule { side: CastleSide::King, right: BLACK_KINGSIDE, empty: 0x6000_0000_0000_0000, king_path: [60, 61, 62], king_to: 62 },
    CastleRule { side: CastleSide::Queen, right: BLACK_QUEENSIDE, empty: 0x0e00_0000_0000_0000, king_path: [60, 59, 58], king_to: 58 },
];

/// Gera todos os lances pseudo-legais para o rei do jogador atual.
/// Os roques gerados aqui já são totalmente legais.
pub fn generate_king_moves_into(board: &Board, moves: &mut Vec<Move>) {
    let us = board.to_move;
    let our_pieces = board.pieces_of(us);
    let Some(from_sq) = board.king_square(us) else {
        return; // Não há rei no tabuleiro (impossível em jogo normal)
    };

    push_piece_moves(board, from_sq, PieceKind::King, king_attacks(from_sq) & !our_pieces, moves);

    // Lógica de roque
    let rules = match us {
        Color::White => &WHITE_CASTLES,
        Color::Black => &BLACK_CASTLES,
    };
    let occupied = board.occupied();
    for rule in rules {
        if board.castling_rights & rule.right == 0 || occupied & rule.empty != 0 {
            continue;
        }
        let (rook_from, _) = castle_rook_squares(us, rule.side);
        if board.pieces(PieceKind::Rook, us) & square_bb(rook_from) == 0 {
            continue;
        }
        if rule.king_path.iter().any(|&sq| board.is_square_attacked_by(sq, !us)) {
            continue;
        }
        moves.push(Move::new(from_sq, rule.king_to, PieceKind::King, MoveKind::Castle(rule.side)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king_moves(fen: &str) -> Vec<Move> {
        let board = Board::from_fen(fen).unwrap();
        let mut moves = Vec::new();
        generate_king_moves_into(&board, &mut moves);
        moves
    }

    fn castles(moves: &[Move]) -> Vec<String> {
        moves.iter().filter(|mv| mv.is_castling()).map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn test_both_castles_available() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castles(&moves), vec!["e1g1", "e1c1"]);
    }

    #[test]
    fn test_no_castle_through_attacked_square() {
        // Torre preta em f8 ataca f1: roque pequeno proibido.
        let moves = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(castles(&moves), vec!["e1c1"]);
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let moves = king_moves("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(castles(&moves).is_empty());
    }

    #[test]
    fn test_queenside_needs_b_file_empty_but_not_safe() {
        // b1 atacada não impede o roque grande; b1 ocupada impede.
        let attacked = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(castles(&attacked), vec!["e1c1"]);
        let blocked = king_moves("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(castles(&blocked).is_empty());
    }
}
