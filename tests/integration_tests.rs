//! Integration tests for the engine's tick cycle and commands

use blockfall::core::{Board, ScriptedSource, UniformSource};
use blockfall::engine::{Engine, EngineConfig, HardDropPolicy, TickOutcome};
use blockfall::types::{Command, Coord, Phase, Shape};

fn scripted(board: Board, shapes: &[Shape]) -> Engine {
    Engine::with_board(
        EngineConfig::default(),
        board,
        ScriptedSource::new(shapes.to_vec()),
    )
    .unwrap()
}

#[test]
fn test_four_by_four_clears_three_rows() {
    let board = Board::from_ascii(&[
        "....", //
        ".###",
        ".###",
        ".###",
    ]);
    let mut engine = scripted(board, &[Shape::I]);

    assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::I));
    // Standing the I up only fits in the empty left column.
    assert!(engine.rotate(true));
    let cells = engine.active_cells().unwrap();
    assert!(cells.iter().all(|c| c.col == 0));

    assert_eq!(engine.tick(), TickOutcome::Locked(Shape::I));
    assert_eq!(engine.tick(), TickOutcome::LinesCleared(3));

    // Only the top of the I survives, now on the bottom row.
    assert_eq!(engine.board().filled_count(), 1);
    assert_eq!(engine.board().get(Coord::new(0, 0)), Some(Some(Shape::I)));
    assert_eq!(engine.tick(), TickOutcome::Spawned(Shape::I));
}

#[test]
fn test_blocked_spawn_ends_the_game() {
    let board = Board::from_ascii(&[
        ".#..", //
        "....",
        "....",
        "....",
    ]);
    let mut engine = scripted(board, &[Shape::O]);

    assert_eq!(engine.tick(), TickOutcome::GameOver(Shape::O));
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.active().is_none());

    let before = engine.board().clone();
    let revision = engine.revision();
    for _ in 0..10 {
        assert_eq!(engine.tick(), TickOutcome::Idle);
    }
    for command in [
        Command::MoveLeft,
        Command::HardDrop,
        Command::RotateCw,
        Command::Pause,
    ] {
        assert!(!engine.apply(command));
    }
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.revision(), revision);
}

#[test]
fn test_hard_drop_then_tick_locks() {
    let mut engine = scripted(Board::new(20, 10), &[Shape::T]);
    engine.tick();

    let distance = engine.hard_drop();
    assert_eq!(distance, 18);
    let cells = engine.active_cells().unwrap();
    assert_eq!(cells.iter().map(|c| c.row).min(), Some(0));
    assert_eq!(engine.phase(), Phase::Falling);

    assert_eq!(engine.tick(), TickOutcome::Locked(Shape::T));
    assert_eq!(engine.board().filled_count(), 4);
}

#[test]
fn test_hard_drop_lock_immediately_policy() {
    let config = EngineConfig::new(20, 10).with_hard_drop(HardDropPolicy::LockImmediately);
    let mut engine = Engine::new(config, ScriptedSource::repeat(Shape::S)).unwrap();
    engine.tick();
    engine.hard_drop();
    assert!(engine.active().is_none());
    assert_eq!(engine.board().filled_count(), 4);
}

#[test]
fn test_ghost_matches_hard_drop() {
    let board = Board::from_ascii(&[
        "..........", //
        "..........",
        "..........",
        "..........",
        "..........",
        "....#.....",
        "..........",
        "..........",
    ]);
    let mut engine = scripted(board, &[Shape::O]);
    engine.tick();

    let ghost = engine.ghost_cells().unwrap();
    engine.hard_drop();
    assert_eq!(engine.active_cells().unwrap(), ghost);
    // Resting on the block at row 2.
    assert_eq!(ghost.iter().map(|c| c.row).min(), Some(3));
}

#[test]
fn test_moves_against_walls_fail() {
    let mut engine = scripted(Board::new(20, 10), &[Shape::J]);
    engine.tick();
    while engine.move_left() {}
    let before = engine.active();
    assert!(!engine.move_left());
    assert_eq!(engine.active(), before);

    while engine.move_right() {}
    let before = engine.active();
    assert!(!engine.apply(Command::MoveRight));
    assert_eq!(engine.active(), before);
}

#[test]
fn test_paused_engine_ignores_everything_but_resume() {
    let mut engine = scripted(Board::new(20, 10), &[Shape::Z]);
    engine.tick();
    assert!(engine.apply(Command::Pause));

    let snap = engine.snapshot();
    assert!(snap.paused);
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert!(!engine.apply(Command::MoveLeft));
    assert!(!engine.apply(Command::RotateCcw));
    assert!(!engine.apply(Command::SoftDrop));
    assert_eq!(engine.snapshot(), snap);

    assert!(engine.apply(Command::Resume));
    assert_eq!(engine.tick(), TickOutcome::Fell);
}

#[test]
fn test_long_random_game_keeps_invariants() {
    let mut engine = Engine::with_seed(EngineConfig::new(12, 6), 42).unwrap();
    let commands = [
        Command::MoveLeft,
        Command::RotateCw,
        Command::MoveRight,
        Command::RotateCcw,
        Command::SoftDrop,
        Command::HardDrop,
    ];

    let mut ticks = 0;
    while !engine.is_game_over() && ticks < 5_000 {
        engine.apply(commands[ticks % commands.len()]);
        assert!(engine.state().is_consistent());
        engine.tick();
        assert!(engine.state().is_consistent());
        ticks += 1;
    }
    if engine.is_game_over() {
        assert!(engine.active().is_none());
        assert_eq!(engine.tick(), TickOutcome::Idle);
    }
}

#[test]
fn test_seeded_engines_are_deterministic() {
    let run = |seed| {
        let mut engine =
            Engine::new(EngineConfig::new(20, 10), UniformSource::new(seed)).unwrap();
        let mut spawned = Vec::new();
        for _ in 0..400 {
            if let TickOutcome::Spawned(shape) = engine.tick() {
                spawned.push(shape);
            }
            engine.hard_drop();
        }
        spawned
    };
    assert_eq!(run(7), run(7));
}
