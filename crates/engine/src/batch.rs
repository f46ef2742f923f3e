//! Batch runner - executes protocol lines against a game
//!
//! Answers go to `out`, one line per query. Rejected lines produce
//! `ERROR <line number>` on `err` and processing continues.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use gamma_core::Game;
use gamma_types::GameConfig;

use crate::protocol::{parse_line, Command, Mode};

/// What the caller should do after a line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// An `I` line arrived before any game: switch to interactive mode
    Interactive(GameConfig),
}

pub struct BatchRunner<W: Write, E: Write> {
    game: Option<Game>,
    out: W,
    err: E,
    line_no: u64,
}

impl<W: Write, E: Write> BatchRunner<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            game: None,
            out,
            err,
            line_no: 0,
        }
    }

    /// Game started by a `B` line, if any
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Number of lines handled so far
    pub fn line_no(&self) -> u64 {
        self.line_no
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Feed lines from `input` until EOF or a switch to interactive mode.
    ///
    /// Lines that are not valid UTF-8 are reported as errors.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<Flow> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(Flow::Continue);
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line)?,
                Err(_) => {
                    self.line_no += 1;
                    self.report_error()?;
                    Flow::Continue
                }
            };
            if let Flow::Interactive(_) = flow {
                self.out.flush()?;
                return Ok(flow);
            }
        }
    }

    /// Handle a single line without its trailing newline.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        self.line_no += 1;

        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                debug!(line = self.line_no, error = %e, "unparsable line");
                self.report_error()?;
                return Ok(Flow::Continue);
            }
        };

        if let Command::Start { mode, config } = command {
            return self.start(mode, config);
        }

        // Game commands before the first start line are errors.
        let Some(game) = self.game.as_mut() else {
            self.report_error()?;
            return Ok(Flow::Continue);
        };

        match command {
            Command::Move { player, x, y } => {
                let placed = game.place_marker(player, x, y);
                writeln!(self.out, "{}", u8::from(placed))?;
            }
            Command::Owned { player } => {
                writeln!(self.out, "{}", game.owned_field_count(player))?;
            }
            Command::Free { player } => {
                writeln!(self.out, "{}", game.free_field_count(player))?;
            }
            Command::Print => match game.render_board() {
                Ok(board) => self.out.write_all(board.as_bytes())?,
                Err(e) => {
                    debug!(line = self.line_no, error = %e, "board not rendered");
                    writeln!(self.err, "ERROR {}", self.line_no)?;
                }
            },
            Command::Start { .. } => unreachable!("start lines handled above"),
        }
        Ok(Flow::Continue)
    }

    fn start(&mut self, mode: Mode, config: GameConfig) -> Result<Flow> {
        if self.game.is_some() {
            self.report_error()?;
            return Ok(Flow::Continue);
        }

        match mode {
            Mode::Interactive => {
                if let Err(e) = config.validate() {
                    debug!(line = self.line_no, error = %e, "interactive game not started");
                    self.report_error()?;
                    return Ok(Flow::Continue);
                }
                Ok(Flow::Interactive(config))
            }
            Mode::Batch => {
                match Game::from_config(&config) {
                    Ok(game) => {
                        self.game = Some(game);
                        writeln!(self.out, "OK {}", self.line_no)?;
                    }
                    Err(e) => {
                        debug!(line = self.line_no, error = %e, "game not created");
                        self.report_error()?;
                    }
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn report_error(&mut self) -> Result<()> {
        writeln!(self.err, "ERROR {}", self.line_no)?;
        Ok(())
    }
}
