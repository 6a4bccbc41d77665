// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos para a geração de lances de cada peça.

use crate::core::{Bitboard, Board, Move, MoveKind, PieceKind, Square};

pub mod pawn;
pub mod knight;
pub mod sliding;
pub mod king;

/// Converte um bitboard de destinos em lances, distinguindo capturas.
/// Os destinos já devem excluir as nossas próprias peças.
#[inline]
pub(crate) fn push_piece_moves(board: &Board, from: Square, piece: PieceKind, mut targets: Bitboard, moves: &mut Vec<Move>) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let kind = match board.kind_at(to) {
            Some(captured) => MoveKind::Capture(captured),
            None => MoveKind::Quiet,
        };
        moves.push(Move::new(from, to, piece, kind));
        targets &= targets - 1;
    }
}
