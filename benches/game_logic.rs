use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{get_shape, rotate, GameController, Grid};
use tui_blockfall::types::{Anchor, Cell, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameController::with_seed(10, 20, 12345);
    game.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game = GameController::with_seed(10, 20, 12345);
                game.start();
            }
            black_box(game.tick());
            game.take_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for row in 16..20 {
                for col in 0..10 {
                    grid.set_cell(row, col, Cell::Frozen(PieceKind::I));
                }
            }
            black_box(grid.clear_completed_lines());
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let mut grid = Grid::new(10, 20);
    for col in 0..9 {
        grid.set_cell(19, col, Cell::Frozen(PieceKind::S));
    }
    let shape = get_shape(PieceKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| {
            for col in 0..8 {
                black_box(grid.can_place(&shape, black_box(Anchor::new(17, col))));
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = get_shape(PieceKind::I);

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(rotate(black_box(&shape), 1)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameController::with_seed(10, 20, 12345);
    game.start();
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_can_place,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
