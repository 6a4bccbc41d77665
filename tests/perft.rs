use roque::{perft, perft_divide, Board};

fn check(fen: &str, expected: &[u64]) {
    let mut board = Board::from_fen(fen).unwrap();
    let original = board;
    for (depth, &nodes) in expected.iter().enumerate() {
        let depth = depth as u8 + 1;
        assert_eq!(perft(&mut board, depth), nodes, "perft({}) of {}", depth, fen);
        assert_eq!(board, original);
    }
}

#[test]
fn perft_starting_position() {
    check("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", &[20, 400, 8902, 197_281]);
}

#[test]
fn perft_kiwipete() {
    check("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", &[48, 2039, 97_862]);
}

#[test]
fn perft_rook_endgame_with_en_passant_pins() {
    check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812, 43_238]);
}

#[test]
fn perft_promotions_and_castling_rights() {
    check("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1", &[6, 264, 9467]);
}

#[test]
fn perft_discovered_checks_and_underpromotion() {
    check("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8", &[44, 1486, 62_379]);
}

#[test]
fn divide_matches_sequential_perft() {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    let divide = perft_divide(&board, 2);
    let moves = board.generate_legal_moves();
    assert_eq!(divide.iter().map(|(mv, _)| *mv).collect::<Vec<_>>(), moves);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);
}
