//! Terminal blockfall runner.
//!
//! Drives an `Engine` from a gravity clock and crossterm key events, and
//! redraws through the framebuffer renderer whenever the engine's revision
//! changes or the terminal is resized.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::engine::{Engine, EngineConfig, GravityClock, HardDropPolicy};
use blockfall::input::{handle_key_event, should_quit, should_restart};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle in the terminal")]
struct Cli {
    #[arg(long, help = "JSON engine config; flags below override its fields")]
    config: Option<PathBuf>,

    #[arg(long, help = "Board height in rows")]
    rows: Option<u16>,

    #[arg(long, help = "Board width in columns")]
    cols: Option<u16>,

    #[arg(long, help = "Gravity interval in milliseconds")]
    tick_ms: Option<u64>,

    #[arg(long, help = "Lock hard-dropped pieces immediately instead of on the next tick")]
    hard_drop_lock: bool,

    #[arg(long, help = "Seed for the shape sequence (default: time based)")]
    seed: Option<u32>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(long, help = "Write logs to this file; logging is off without it")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                EngineConfig::from_json_str(&text)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms;
        }
        if self.hard_drop_lock {
            config.hard_drop = HardDropPolicy::LockImmediately;
        }
        config.validate()?;
        Ok(config)
    }

    fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    // The terminal owns stdout, so logs only go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(cli.level()))
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = cli.engine_config()?;
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(rows = config.rows, cols = config.cols, seed, "starting");

    let mut term = TerminalRenderer::stdout();
    term.enter()?;
    let result = run(&mut term, config, seed);
    // Restore the terminal before any error is printed.
    term.exit()?;
    result
}

fn run(term: &mut TerminalRenderer, config: EngineConfig, seed: u32) -> Result<()> {
    let mut engine = Engine::with_seed(config, seed)?;
    let mut clock = GravityClock::new(config.tick_interval());
    let mut games = 1u32;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();
    let mut drawn: Option<u64> = None;
    let mut last = Instant::now();

    loop {
        if drawn != Some(engine.revision()) {
            view.render_into(&engine.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(engine.revision());
        }

        if event::poll(clock.until_next())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(games, "quit");
                        return Ok(());
                    }
                    if should_restart(key) {
                        games += 1;
                        engine = Engine::with_seed(config, seed.wrapping_add(games))?;
                        clock.reset();
                        drawn = None;
                        info!(games, "restart");
                    } else if let Some(command) = handle_key_event(key) {
                        let was_paused = engine.is_paused();
                        engine.apply(command);
                        if was_paused && !engine.is_paused() {
                            clock.reset();
                        }
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let due = clock.advance(now - last);
        last = now;
        for _ in 0..due {
            engine.tick();
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
