//! Protocol module - line commands of the text front end
//!
//! One command per line: a command letter, then whitespace-separated decimal
//! arguments. Empty lines and lines starting with `#` carry no command.
//!
//! | Line | Meaning |
//! |------|---------|
//! | `B width height players areas` | start batch mode |
//! | `I width height players areas` | start interactive mode |
//! | `m player x y` | place a marker, answers `1` or `0` |
//! | `b player` | fields owned by the player |
//! | `f player` | fields the player could still claim |
//! | `p` | print the board |

use gamma_types::GameConfig;

/// Which front end a start line selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Batch,
    Interactive,
}

/// A parsed command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start { mode: Mode, config: GameConfig },
    Move { player: u32, x: u32, y: u32 },
    Owned { player: u32 },
    Free { player: u32 },
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    UnknownCommand(char),

    #[error("command must be followed by whitespace")]
    MissingSeparator,

    #[error("command {command:?} takes {expected} arguments, got {got}")]
    Arity {
        command: char,
        expected: usize,
        got: usize,
    },

    #[error("invalid number {0:?}")]
    BadNumber(String),
}

/// Parse one input line, without its trailing newline.
///
/// Returns `Ok(None)` for lines that carry no command.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut chars = line.chars();
    let Some(letter) = chars.next() else {
        return Ok(None);
    };
    if letter == '#' {
        return Ok(None);
    }

    let rest = chars.as_str();
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return Err(ParseError::MissingSeparator);
    }

    let expected = match letter {
        'B' | 'I' => 4,
        'm' => 3,
        'b' | 'f' => 1,
        'p' => 0,
        other => return Err(ParseError::UnknownCommand(other)),
    };

    let mut args = [0u32; 4];
    let mut got = 0;
    for word in rest.split_whitespace() {
        if got < expected {
            args[got] = parse_number(word)?;
        }
        got += 1;
    }
    if got != expected {
        return Err(ParseError::Arity {
            command: letter,
            expected,
            got,
        });
    }

    let command = match letter {
        'B' | 'I' => Command::Start {
            mode: if letter == 'B' {
                Mode::Batch
            } else {
                Mode::Interactive
            },
            config: GameConfig::new(args[0], args[1], args[2], args[3]),
        },
        'm' => Command::Move {
            player: args[0],
            x: args[1],
            y: args[2],
        },
        'b' => Command::Owned { player: args[0] },
        'f' => Command::Free { player: args[0] },
        _ => Command::Print,
    };
    Ok(Some(command))
}

/// Plain decimal digits only: no sign, no overflow past `u32::MAX`.
fn parse_number(word: &str) -> Result<u32, ParseError> {
    if !word.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::BadNumber(word.to_string()));
    }
    word.parse()
        .map_err(|_| ParseError::BadNumber(word.to_string()))
}
