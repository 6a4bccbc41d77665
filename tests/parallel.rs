use roque::*;

const POSITIONS: [&str; 4] = [
    START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

#[test]
fn worker_count_does_not_change_the_choice() {
    for fen in POSITIONS {
        let board = Board::from_fen(fen).unwrap();
        let single = choose_best_move(&board, 3, 1).result().cloned().unwrap();
        let parallel = choose_best_move(&board, 3, 3).result().cloned().unwrap();
        assert_eq!(single.best_move, parallel.best_move, "{}", fen);
        assert_eq!(single.score, parallel.score, "{}", fen);
        // A contagem de nós depende de quem chega primeiro à TT; os scores não.
        let scores = |result: &SearchResult| result.root_moves.iter().map(|r| (r.mv, r.score)).collect::<Vec<_>>();
        assert_eq!(scores(&single), scores(&parallel), "{}", fen);
    }
}

#[test]
fn root_reports_follow_generation_order() {
    let board = Board::from_fen(POSITIONS[1]).unwrap();
    let result = choose_best_move(&board, 2, 4).result().cloned().unwrap();
    let legal = board.generate_legal_moves();
    assert_eq!(result.root_moves.iter().map(|r| r.mv).collect::<Vec<_>>(), legal);

    let best = result.root_moves.iter().map(|r| r.score).max().unwrap();
    let first_best = result.root_moves.iter().find(|r| r.score == best).unwrap();
    assert_eq!(result.best_move, first_best.mv);
    assert_eq!(result.score, best);
    assert!(result.nodes >= result.root_moves.iter().map(|r| r.nodes).sum::<u64>());
}

#[test]
fn more_workers_than_root_moves() {
    // O cavalo tira g2 ao rei: sobram g1 e h2.
    let board = Board::from_fen("k7/8/8/8/8/4n3/8/7K w - - 0 1").unwrap();
    assert_eq!(board.generate_legal_moves().len(), 2);
    let result = choose_best_move(&board, 3, 16).result().cloned().unwrap();
    assert_eq!(result.root_moves.len(), 2);
    assert_eq!(result.depth, 3);
}

#[test]
fn single_legal_move_is_returned() {
    let board = Board::from_fen("k7/8/8/8/8/8/1r6/7K w - - 0 1").unwrap();
    let legal = board.generate_legal_moves();
    assert_eq!(legal.len(), 1);
    for workers in [1, 4] {
        assert_eq!(choose_best_move(&board, 2, workers).best_move(), Some(legal[0]));
    }
}
