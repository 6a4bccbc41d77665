//! make/undo restaura o estado exato e o hash incremental coincide com o recalculado.

use roque::Board;

fn walk(board: &mut Board, depth: u8, visited: &mut u64) {
    assert_eq!(board.zobrist_hash, board.compute_zobrist_hash(), "{}", board.to_fen());
    *visited += 1;
    if depth == 0 {
        return;
    }
    for mv in board.generate_legal_moves() {
        let before = *board;
        let undo = board.make_move(mv);
        assert!(!board.is_king_in_check(before.to_move), "{} leaves the king in check in {}", mv, before.to_fen());
        walk(board, depth - 1, visited);
        board.undo_move(undo);
        assert_eq!(*board, before, "undo of {} in {}", mv, before.to_fen());
    }
}

#[test]
fn every_position_within_three_plies_is_restored() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];
    for fen in fens {
        let mut board = Board::from_fen(fen).unwrap();
        let mut visited = 0;
        walk(&mut board, 3, &mut visited);
        assert!(visited > 1000);
    }
}

#[test]
fn en_passant_target_only_after_double_push() {
    let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    let push = board.parse_move("d7d5").unwrap();
    board.make_move(push);
    assert!(board.parse_move("e5d6").unwrap().is_en_passant());

    // Um lance depois, a captura en passant já não existe.
    board.make_move(board.parse_move("e1e2").unwrap());
    board.make_move(board.parse_move("e8e7").unwrap());
    assert!(board.parse_move("e5d6").is_err());
}

#[test]
fn castling_rights_are_lost_when_rook_is_captured() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").unwrap();
    board.make_move(board.parse_move("g2a8").unwrap());
    // Só as pretas perdem o roque grande.
    assert!(board.to_fen().contains(" KQk "), "{}", board.to_fen());
    assert_eq!(board.zobrist_hash, board.compute_zobrist_hash());
}
