use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackfall::core::{Game, GameSnapshot, Grid};
use stackfall::types::{GameCommand, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.tick(black_box(16)).is_none() && !game.phase().is_live() {
                game.start();
            }
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..10 {
                    grid.fill(x, y, PieceKind::I);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_drop_step(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("hard_drop_step", |b| {
        b.iter(|| {
            if !game.apply_command(GameCommand::HardDropStep) {
                game.start();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            game.apply_command(black_box(GameCommand::RotateCw));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_clear,
    bench_drop_step,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
