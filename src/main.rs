//! Terminal falling-block game (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. The loop blocks
//! on input until the next gravity tick is due, then polls the scheduler.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_blockfall::config::GameConfig;
use tui_blockfall::core::{GameController, IntervalScheduler, Session};
use tui_blockfall::event_log::EventLog;
use tui_blockfall::input::{handle_key_event, is_pause_key, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TermView, TerminalRenderer, Viewport};

/// Input wait while the scheduler is stopped (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

type GameSession = Session<IntervalScheduler, StdRng>;

fn main() -> Result<()> {
    let mut config = GameConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let controller = GameController::new(config.width, config.height, rng);
    let mut session = Session::new(controller, IntervalScheduler::default());

    let mut log = match config.log_path.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log {
        let written = log.written();
        match log.finish() {
            Ok(_) => println!("[Blockfall] {} events logged", written),
            Err(e) => eprintln!("[Blockfall] {}", e),
        }
    }

    let game = session.controller();
    println!(
        "[Blockfall] Final score {} ({} lines, {} pieces)",
        game.score(),
        game.lines(),
        game.pieces()
    );
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    mut log: Option<&mut EventLog<BufWriter<File>>>,
) -> Result<()> {
    let view = GameView::default();
    let mut term_view = TermView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    };

    session.start();

    loop {
        match log.as_deref_mut() {
            Some(log) => session.flush_to(&mut (&mut term_view, log)),
            None => session.flush_to(&mut term_view),
        }

        if term_view.take_dirty() {
            view.render_into(term_view.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = session
            .scheduler()
            .time_until_next(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_pause_key(key) {
                        session.toggle_pause();
                    } else if let Some(action) = handle_key_event(key) {
                        session.on_input(action);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    term_view.invalidate();
                }
                _ => {}
            }
        }

        if session.scheduler_mut().poll_at(Instant::now()) {
            session.on_tick();
        }
    }
}
