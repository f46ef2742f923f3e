//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! The types carry no engine logic, so they can be shared by the rules engine,
//! the batch protocol and the terminal front end alike.
//!
//! # Players
//!
//! Players are numbered from 1. Player 0 is never a real player: on the board it
//! marks an unclaimed field. At most [`MAX_PLAYERS`] players can take part, because
//! every player must be drawable as a single character:
//!
//! | Player | Symbol |
//! |--------|--------|
//! | 0 / invalid | `.` |
//! | 1..=9 | `'1'..='9'` |
//! | 10..=35 | `'a'..='z'` |
//!
//! # Examples
//!
//! ```
//! use gamma_types::{player_symbol, GameConfig, PlayerId};
//!
//! let p = PlayerId::new(12).unwrap();
//! assert_eq!(p.symbol(), 'c');
//! assert_eq!(p.index(), 11);
//!
//! assert_eq!(player_symbol(0), '.');
//! assert_eq!(player_symbol(9), '9');
//!
//! let cfg = GameConfig::new(10, 10, 2, 3);
//! assert!(cfg.validate().is_ok());
//! assert!(GameConfig::new(10, 10, 36, 3).validate().is_err());
//! ```

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Maximum number of players in one game ('1'..'9' plus 'a'..'z')
pub const MAX_PLAYERS: u32 = 35;

/// Symbol used for unclaimed fields and invalid players
pub const EMPTY_SYMBOL: char = '.';

/// Map a raw player number to its board symbol.
///
/// Returns [`EMPTY_SYMBOL`] for 0 and for numbers above [`MAX_PLAYERS`].
pub fn player_symbol(raw: u32) -> char {
    match raw {
        1..=9 => char::from(b'0' + raw as u8),
        10..=MAX_PLAYERS => char::from(b'a' + (raw - 10) as u8),
        _ => EMPTY_SYMBOL,
    }
}

/// A validated player number in `1..=MAX_PLAYERS`.
///
/// Range checks happen once, when the id is built. Engine internals can index
/// per-player tables with [`PlayerId::index`] without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    /// Build a player id, rejecting 0 and anything above [`MAX_PLAYERS`].
    pub fn new(raw: u32) -> Option<Self> {
        if raw > MAX_PLAYERS {
            return None;
        }
        NonZeroU32::new(raw).map(Self)
    }

    /// The 1-based player number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based index into per-player tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Board symbol of this player.
    pub fn symbol(self) -> char {
        player_symbol(self.get())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Errors produced when validating a [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("player count must be non-zero")]
    NoPlayers,

    #[error("player count {0} exceeds the maximum of 35")]
    TooManyPlayers(u32),

    #[error("area limit must be non-zero")]
    NoAreas,
}

/// Shape of a game: board size, player count and per-player area limit.
///
/// The shape is fixed for the whole lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub players: u32,
    /// Maximum number of distinct areas a single player may own
    pub areas: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> Self {
        Self {
            width,
            height,
            players,
            areas,
        }
    }

    /// Check every field against the construction rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.players));
        }
        if self.areas == 0 {
            return Err(ConfigError::NoAreas);
        }
        Ok(())
    }

    /// Total number of fields on the board
    pub fn field_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Player intents in interactive mode.
///
/// `Up` moves towards higher row numbers, which are drawn nearer the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorAction {
    Up,
    Down,
    Left,
    Right,
    /// Claim the field under the cursor
    Place,
    /// Give up the current turn
    Skip,
}

impl CursorAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gamma_types::CursorAction;
    ///
    /// assert_eq!(CursorAction::from_str("place"), Some(CursorAction::Place));
    /// assert_eq!(CursorAction::from_str("LEFT"), Some(CursorAction::Left));
    /// assert_eq!(CursorAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(CursorAction::Up),
            "down" => Some(CursorAction::Down),
            "left" => Some(CursorAction::Left),
            "right" => Some(CursorAction::Right),
            "place" => Some(CursorAction::Place),
            "skip" => Some(CursorAction::Skip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CursorAction::Up => "up",
            CursorAction::Down => "down",
            CursorAction::Left => "left",
            CursorAction::Right => "right",
            CursorAction::Place => "place",
            CursorAction::Skip => "skip",
        }
    }
}
