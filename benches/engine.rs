//! Benchmarks do motor com Criterion: geração de lances, avaliação, perft e busca.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roque::api::new_game;
use roque::search::{choose_best_move, Evaluator};
use roque::{perft, Board};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_move_generation(c: &mut Criterion) {
    let start = new_game();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(start.generate_legal_moves()))
    });
    c.bench_function("legal_moves_kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_legal_moves()))
    });
}

fn bench_make_undo(c: &mut Criterion) {
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    let moves = kiwipete.generate_legal_moves();

    c.bench_function("make_undo_kiwipete", |b| {
        b.iter(|| {
            let mut board = kiwipete;
            for &mv in &moves {
                let undo = board.make_move(mv);
                board.undo_move(undo);
            }
            black_box(board.zobrist_hash)
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = Evaluator::default();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();

    c.bench_function("evaluate_kiwipete", |b| b.iter(|| black_box(evaluator.evaluate(&kiwipete))));
}

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft_3_starting_position", |b| {
        b.iter(|| {
            let mut board = new_game();
            black_box(perft(&mut board, 3))
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    for workers in [1, 4] {
        group.bench_function(format!("kiwipete_depth_3_workers_{}", workers), |b| {
            b.iter(|| black_box(choose_best_move(&kiwipete, 3, workers)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_move_generation,
    bench_make_undo,
    bench_evaluate,
    bench_perft,
    bench_search,
);
criterion_main!(benches);
