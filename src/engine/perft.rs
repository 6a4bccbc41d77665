// Contagem de nós (perft) para validar o gerador de lances.

use crate::core::{Board, Move};
use rayon::prelude::*;

/// Número de folhas a `depth` meios-lances da posição.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let undo = board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move(undo);
    }
    nodes
}

/// Perft dividido por lance de raiz, com os lances de raiz em paralelo.
/// O resultado segue a ordem de geração.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    board
        .generate_legal_moves()
        .par_iter()
        .map(|&mv| {
            let mut board_clone = *board;
            board_clone.make_move(mv);
            (mv, perft(&mut board_clone, depth - 1))
        })
        .collect()
}
