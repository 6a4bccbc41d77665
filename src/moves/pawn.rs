// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões (avanços, capturas, promoções e en passant).

use crate::core::*;

const NOT_A_FILE: Bitboard = 0xfefefefefefefefe;
const NOT_H_FILE: Bitboard = 0x7f7f7f7f7f7f7f7f;

/// Tabelas de ataques de peão, indexadas por [cor][casa].
const fn generate_pawn_attacks_table() -> [[Bitboard; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    let mut square = 0;

    while square < 64 {
        let bb = 1u64 << square;
        attacks[0][square] = ((bb & NOT_H_FILE) << 9) | ((bb & NOT_A_FILE) << 7);
        attacks[1][square] = ((bb & NOT_H_FILE) >> 7) | ((bb & NOT_A_FILE) >> 9);
        square += 1;
    }

    attacks
}

static PAWN_ATTACKS: [[Bitboard; 64]; 2] = generate_pawn_attacks_table();

/// Casas atacadas por um peão da cor dada colocado em `square`.
#[inline(always)]
pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][square as usize]
}

/// Empurra o lance, expandindo-o em quatro promoções quando chega à última linha.
#[inline]
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, captured: Option<PieceKind>) {
    let last_rank = rank_of(to) == 0 || rank_of(to) == 7;
    if last_rank {
        for promote_to in PieceKind::PROMOTIONS {
            moves.push(Move::new(from, to, PieceKind::Pawn, MoveKind::Promotion { promote_to, captured }));
        }
    } else {
        let kind = match captured {
            Some(piece) => MoveKind::Capture(piece),
            None => MoveKind::Quiet,
        };
        moves.push(Move::new(from, to, PieceKind::Pawn, kind));
    }
}

/// Gera todos os lances pseudo-legais para os peões do jogador atual.
pub fn generate_pawn_moves_into(board: &Board, moves: &mut Vec<Move>) {
    let us = board.to_move;
    let them_bb = board.pieces_of(!us);
    let all_pieces = board.occupied();
    let (forward, start_rank): (i8, u8) = match us {
        Color::White => (8, 1),
        Color::Black => (-8, 6),
    };

    let mut our_pawns = board.pieces(PieceKind::Pawn, us);
    while our_pawns != 0 {
        let from = our_pawns.trailing_zeros() as Square;
        our_pawns &= our_pawns - 1;

        // Avanço simples e duplo
        let one = (from as i8 + forward) as Square;
        if all_pieces & square_bb(one) == 0 {
            push_pawn_move(moves, from, one, None);
            if rank_of(from) == start_rank {
                let two = (one as i8 + forward) as Square;
                if all_pieces & square_bb(two) == 0 {
                    moves.push(Move::new(from, two, PieceKind::Pawn, MoveKind::DoublePush));
                }
            }
        }

        // Capturas
        let mut captures = pawn_attacks(from, us) & them_bb;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            push_pawn_move(moves, from, to, board.kind_at(to));
            captures &= captures - 1;
        }

        // En passant: só se o peão adversário que avançou duas casas lá estiver
        if let Some(ep_target) = board.en_passant_target {
            if pawn_attacks(from, us) & square_bb(ep_target) != 0 {
                let victim = en_passant_victim(ep_target, us);
                if board.pieces(PieceKind::Pawn, !us) & square_bb(victim) != 0 {
                    moves.push(Move::new(from, ep_target, PieceKind::Pawn, MoveKind::EnPassant));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str) -> Vec<Move> {
        let board = Board::from_fen(fen).unwrap();
        let mut moves = Vec::new();
        generate_pawn_moves_into(&board, &mut moves);
        moves
    }

    #[test]
    fn test_pawn_attack_tables_do_not_wrap() {
        assert_eq!(pawn_attacks(8, Color::White), 1 << 17); // a2 -> b3
        assert_eq!(pawn_attacks(15, Color::White), 1 << 22); // h2 -> g3
        assert_eq!(pawn_attacks(52, Color::Black), (1 << 43) | (1 << 45)); // e7 -> d6, f6
        assert_eq!(pawn_attacks(60, Color::White), 0);
    }

    #[test]
    fn test_start_position_pawn_moves() {
        let moves = pawn_moves(START_FEN);
        assert_eq!(moves.len(), 16);
        assert_eq!(moves.iter().filter(|mv| mv.is_double_push()).count(), 8);
    }

    #[test]
    fn test_promotions_with_and_without_capture() {
        let moves = pawn_moves("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promos: Vec<_> = moves.iter().filter(|mv| mv.promotion().is_some()).collect();
        assert_eq!(promos.len(), 8);
        assert_eq!(promos.iter().filter(|mv| mv.captured() == Some(PieceKind::Knight)).count(), 4);
    }

    #[test]
    fn test_en_passant() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to_string(), "e5d6");
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }
}
