//! Gamma runner (default binary).
//!
//! Reads protocol lines from stdin. A `B` line runs the rest of the input in
//! batch mode; an `I` line switches to the interactive terminal game, which
//! reads keys from the terminal and prints the final board when it ends.
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); stdout carries protocol output.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gamma::engine::{ActionOutcome, BatchRunner, Flow, Session};
use gamma::input::{handle_key_event, should_quit};
use gamma::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use gamma::types::GameConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut runner = BatchRunner::new(io::stdout().lock(), io::stderr());
    let flow = runner.run(io::stdin().lock())?;
    info!(lines = runner.line_no(), "input finished");
    drop(runner);

    match flow {
        Flow::Continue => Ok(()),
        Flow::Interactive(config) => play(&config),
    }
}

fn play(config: &GameConfig) -> Result<()> {
    let mut session = Session::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut session);
    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    print!("{}", session.game());
    for (symbol, owned) in session.summary() {
        println!("PLAYER {symbol} {owned}");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            // The final frame stays up until any key.
            Event::Key(key) if key.kind == KeyEventKind::Press && session.is_over() => {
                return Ok(());
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match session.apply(action) {
                    ActionOutcome::Rejected(e) => debug!(error = %e, "move rejected"),
                    outcome => debug!(?action, ?outcome, "action applied"),
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
