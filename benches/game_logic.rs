use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameEngine, GameSnapshot};
use tui_blockfall::term::{GameView, Viewport};
use tui_blockfall::types::{Direction, PieceColor, Position};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::default();
    engine.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine = GameEngine::default();
                engine.start();
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    board.set(Position::new(row, col), Some(PieceColor::Cyan));
                }
            }
            black_box(board.clear_filled_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            let mut engine = GameEngine::default();
            black_box(engine.spawn_piece());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = GameEngine::default();
    engine.start();
    let mut dir = Direction::Left;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !engine.try_move(black_box(dir)) {
                dir = match dir {
                    Direction::Left => Direction::Right,
                    Direction::Right => Direction::Left,
                };
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut engine = GameEngine::default();
    engine.start();
    let mut snap = GameSnapshot::default();
    engine.snapshot_into(&mut snap);
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(60, 22));

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(60, 22), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_render
);
criterion_main!(benches);
