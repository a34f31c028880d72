//! Terminal 2048 runner (default binary).
//!
//! Blocking loop: draw, wait for one key, resolve the slide while drawing
//! every animation tick, then draw the settled board with its new tile.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::core::{Board, GameConfig, GameSnapshot, GameState, Geometry, SlideOutcome};
use tui_2048::input::{handle_key_event, is_press, should_quit};
use tui_2048::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::types::{
    GameAction, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_STEP, TICK_MS,
};

#[derive(Parser, Debug)]
#[command(version, about = "Play 2048 in the terminal")]
struct Args {
    /// Seed for tile spawns; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Cell width in sub-cell units.
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    cell_width: i32,
    /// Cell height in sub-cell units.
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    cell_height: i32,
    /// Distance a tile travels per animation tick.
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: i32,
    /// Milliseconds between animation ticks.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,
    /// Write logs to this file. The terminal is owned by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "debug", "tui_2048_core=trace".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let geometry = Geometry::new(args.cell_width, args.cell_height, args.step)?;
    let config = GameConfig::new(geometry, args.tick_ms);

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        cell_width = args.cell_width,
        cell_height = args.cell_height,
        step = args.step,
        tick_ms = args.tick_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u64) -> Result<()> {
    let mut game = GameState::with_seed(config, seed);
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        view.render_into(&game.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        let key = match event::read()? {
            Event::Key(key) if is_press(&key) => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            return Ok(());
        }

        match handle_key_event(key) {
            Some(GameAction::Slide(direction)) => {
                let slides = game.slides();
                let episode_id = game.episode_id();
                let mut frame_err = None;

                let mut draw_tick = |board: &Board| {
                    if frame_err.is_some() {
                        return;
                    }
                    let mut snap = GameSnapshot::of_board(board);
                    snap.slides = slides;
                    snap.episode_id = episode_id;
                    view.render_into(&snap, viewport(), &mut fb);
                    if let Err(err) = term.draw_swap(&mut fb) {
                        frame_err = Some(err);
                        return;
                    }
                    thread::sleep(config.tick);
                };
                let outcome = game.slide_with(direction, &mut draw_tick);

                if let Some(err) = frame_err {
                    return Err(err);
                }
                if outcome == SlideOutcome::Lost {
                    info!(slides = game.slides(), best = game.board().max_value(), "board jammed");
                }
            }
            Some(GameAction::Restart) => game.restart(),
            None => {}
        }
    }
}
