use criterion::*;

use tictactoe::search::{AlphaBeta, Minimax, SearchStrategy};
use tictactoe::{Board, Marker, Pos};

/// Mid-game position on a 6x6 board
fn midgame() -> Board {
    let mut board = Board::new(6).unwrap();
    let marks = [
        (1, 2, Marker::Player),
        (2, 2, Marker::Engine),
        (2, 3, Marker::Player),
        (3, 3, Marker::Engine),
        (3, 2, Marker::Player),
    ];
    for (r, c, m) in marks {
        board.set(Pos::new(r, c), m);
    }
    board
}

fn criterion_alphabeta(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabeta");
    group.sample_size(20);

    for depth in 1..4u32 {
        for pruning in [true, false] {
            let id = BenchmarkId::new(if pruning { "pruned" } else { "plain" }, depth);
            group.bench_with_input(id, &depth, |b, &depth| {
                let mut board = midgame();
                b.iter(|| AlphaBeta::with_pruning(black_box(depth), pruning).search(&mut board))
            });
        }
    }

    group.finish();
}

fn criterion_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("3x3 after center", |b| {
        let mut board = Board::new(3).unwrap();
        board.set(Pos::new(1, 1), Marker::Player);
        b.iter(|| Minimax::new().search(black_box(&mut board)))
    });

    group.finish();
}

criterion_group!(search, criterion_alphabeta, criterion_minimax);
criterion_main!(search);
