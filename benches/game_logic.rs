use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use blockfall::core::{Board, GameState, ScriptedSource};
use blockfall::engine::{Engine, EngineConfig};
use blockfall::types::{Command, Shape};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::with_seed(EngineConfig::default(), 12345).unwrap();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine = Engine::with_seed(EngineConfig::default(), 12345).unwrap();
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Board::new(30, 20);
    for row in 0..4 {
        full.fill_row(row, Shape::I);
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter_batched(
            || full.clone(),
            |mut board| black_box(board.clear_full_lines()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        b.iter_batched(
            || GameState::new(30, 20),
            |mut state| black_box(state.spawn(Shape::T)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_commands(c: &mut Criterion) {
    let mut engine = Engine::new(EngineConfig::default(), ScriptedSource::repeat(Shape::L))
        .unwrap();
    engine.tick();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.apply(black_box(Command::MoveLeft));
            engine.apply(black_box(Command::MoveRight));
        })
    });

    c.bench_function("rotate_cw", |b| {
        b.iter(|| black_box(engine.rotate(true)))
    });

    c.bench_function("ghost", |b| b.iter(|| black_box(engine.ghost_cells())));
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_spawn, bench_commands);
criterion_main!(benches);
