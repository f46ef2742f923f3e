//! Game module - move processing and read-only queries
//!
//! [`Game::try_place`] is the only mutating entry point. It validates the move,
//! classifies it as a new area, an extension or a merge, claims the field and
//! updates the per-player counters incrementally, so that
//! [`Game::free_field_count`] never scans the board.

use std::fmt;

use tracing::{debug, instrument};

use crate::adjacency::{
    diagonal_pinch_count, distance_two_count, distinct_areas, neighbor_areas, orthogonal_count,
    representative_area,
};
use crate::board::{Board, Field};
use crate::error::{GameError, MoveError};
use crate::merge::relabel_region;
use crate::types::{player_symbol, GameConfig, PlayerId, EMPTY_SYMBOL};

/// Per-player counters, maintained move by move.
///
/// `boundary` and `busy_areas` are running sums of the per-move deltas. Either
/// can dip below zero for a while (an opponent's move costs boundary before the
/// next own move adds it back, and closing a loop releases more area slots than
/// were counted), so both are kept signed and clamped only when read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerState {
    /// Unclaimed fields next to this player's territory
    boundary: i64,
    /// Areas currently held, never above the game's area limit
    busy_areas: i64,
    /// Fields owned; every successful move adds exactly one
    completed_moves: u64,
}

impl PlayerState {
    pub fn boundary(&self) -> u64 {
        u64::try_from(self.boundary).unwrap_or(0)
    }

    pub fn busy_areas(&self) -> u32 {
        u32::try_from(self.busy_areas).unwrap_or(0)
    }

    pub fn completed_moves(&self) -> u64 {
        self.completed_moves
    }
}

/// How an accepted move was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// No same-player neighbour: a fresh area was opened
    NewArea { area: u32 },
    /// The field joined the single area around it
    Extension { area: u32 },
    /// Several areas were joined under `area`
    Merge { area: u32, joined: u32 },
}

impl MoveKind {
    /// Area id the claimed field ended up in
    pub fn area(self) -> u32 {
        match self {
            MoveKind::NewArea { area }
            | MoveKind::Extension { area }
            | MoveKind::Merge { area, .. } => area,
        }
    }
}

/// A running game: the board plus one [`PlayerState`] per player.
///
/// Shape (dimensions, player count, area limit) is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: Vec<PlayerState>,
    areas: u32,
    /// Scratch work-list for merge traversals, empty between moves
    merge_stack: Vec<(u32, u32)>,
}

impl Game {
    /// Create a new game with an empty board.
    ///
    /// Fails with [`GameError::InvalidConfig`] when any argument is zero or there
    /// are more than 35 players, and with [`GameError::OutOfMemory`] when the board
    /// cannot be allocated.
    pub fn new(width: u32, height: u32, players: u32, areas: u32) -> Result<Self, GameError> {
        Self::from_config(&GameConfig::new(width, height, players, areas))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let board = Board::new(config.width, config.height)?;
        let mut states = Vec::new();
        states
            .try_reserve_exact(config.players as usize)
            .map_err(|_| GameError::OutOfMemory)?;
        states.resize(config.players as usize, PlayerState::default());

        debug!(?config, "game created");
        Ok(Self {
            board,
            players: states,
            areas: config.areas,
            merge_stack: Vec::new(),
        })
    }

    /// Validate a raw player number against this game.
    pub fn player(&self, raw: u32) -> Option<PlayerId> {
        PlayerId::new(raw).filter(|p| p.index() < self.players.len())
    }

    /// Place a marker for `player` at (x, y).
    ///
    /// Returns false, leaving the game untouched, when the move is illegal.
    pub fn place_marker(&mut self, player: u32, x: u32, y: u32) -> bool {
        self.try_place(player, x, y).is_ok()
    }

    /// Place a marker and report how the move was classified.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] for an unknown player, an off-board or taken
    /// field, or an isolated move by a player already at the area limit. No
    /// state changes in any of those cases.
    #[instrument(level = "debug", skip(self))]
    pub fn try_place(&mut self, player: u32, x: u32, y: u32) -> Result<MoveKind, MoveError> {
        let player = self.player(player).ok_or(MoveError::InvalidPlayer(player))?;
        if !self.board.contains(x, y) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        if self.board.field(x, y).is_claimed() {
            return Err(MoveError::Occupied { x, y });
        }

        let around = orthogonal_count(&self.board, Some(player), x, y);
        if around == 0 && self.players[player.index()].busy_areas == i64::from(self.areas) {
            debug!(%player, limit = self.areas, "isolated move over area limit");
            return Err(MoveError::AreaLimit {
                player: player.get(),
                limit: self.areas,
            });
        }

        // Boundary changes of the acting player, applied once at the end.
        let mut boundary_delta: i64 = 0;

        let kind = if around == 0 {
            let state = &mut self.players[player.index()];
            state.busy_areas += 1;
            // Ids follow the running count, modulo the id width.
            let area = state.busy_areas as u32;
            self.board.claim(x, y, player, area);
            MoveKind::NewArea { area }
        } else {
            let ids = neighbor_areas(&self.board, player, x, y);
            let distinct = distinct_areas(&ids, around);
            let area = representative_area(&ids);
            self.board.claim(x, y, player, area);
            // The claimed field was counted as boundary.
            boundary_delta -= 1;

            let state = &mut self.players[player.index()];
            if distinct == 1 {
                state.busy_areas -= i64::from(around - 1);
                MoveKind::Extension { area }
            } else {
                state.busy_areas -= i64::from(distinct - 1);
                for start in self.board.neighbors(x, y) {
                    relabel_region(&mut self.board, area, player, start, &mut self.merge_stack);
                }
                MoveKind::Merge {
                    area,
                    joined: distinct,
                }
            }
        };

        boundary_delta += i64::from(orthogonal_count(&self.board, None, x, y));
        boundary_delta -= i64::from(distance_two_count(&self.board, player, x, y));
        boundary_delta -= i64::from(diagonal_pinch_count(&self.board, player, x, y));

        let state = &mut self.players[player.index()];
        state.completed_moves += 1;
        state.boundary += boundary_delta;

        // Neighbouring opponents lose the field they could have grown into.
        for (nx, ny) in self.board.neighbors(x, y) {
            if let Some(other) = self.board.field(nx, ny).owner() {
                if other != player {
                    let st = &mut self.players[other.index()];
                    st.boundary -= 1;
                }
            }
        }

        debug!(?kind, boundary_delta, "move applied");
        Ok(kind)
    }

    fn state(&self, raw: u32) -> Option<&PlayerState> {
        self.player(raw).map(|p| &self.players[p.index()])
    }

    /// Counters of a player, None for invalid ids
    pub fn player_state(&self, player: u32) -> Option<PlayerState> {
        self.state(player).copied()
    }

    /// Number of fields owned by `player` (0 for invalid ids)
    pub fn owned_field_count(&self, player: u32) -> u64 {
        self.state(player).map_or(0, |s| s.completed_moves)
    }

    /// Number of fields `player` could still claim.
    ///
    /// A player at the area limit can only grow existing areas, so this is the
    /// maintained boundary. Otherwise any unclaimed field is playable.
    pub fn free_field_count(&self, player: u32) -> u64 {
        match self.state(player) {
            None => 0,
            Some(s) if s.busy_areas == i64::from(self.areas) => s.boundary(),
            Some(_) => self.field_count() - self.claimed_field_count(),
        }
    }

    /// Areas currently held by `player` (0 for invalid ids)
    pub fn busy_areas(&self, player: u32) -> u32 {
        self.state(player).map_or(0, PlayerState::busy_areas)
    }

    /// Maintained boundary counter of `player` (0 for invalid ids)
    pub fn boundary(&self, player: u32) -> u64 {
        self.state(player).map_or(0, PlayerState::boundary)
    }

    /// Fields claimed by all players together
    pub fn claimed_field_count(&self) -> u64 {
        self.players.iter().map(|s| s.completed_moves).sum()
    }

    pub fn field_count(&self) -> u64 {
        u64::from(self.board.width()) * u64::from(self.board.height())
    }

    pub fn board_width(&self) -> u32 {
        self.board.width()
    }

    pub fn board_height(&self) -> u32 {
        self.board.height()
    }

    pub fn player_count(&self) -> u32 {
        self.players.len() as u32
    }

    pub fn area_limit(&self) -> u32 {
        self.areas
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new(
            self.board.width(),
            self.board.height(),
            self.player_count(),
            self.areas,
        )
    }

    /// Field at (x, y), None if out of bounds
    pub fn field(&self, x: u32, y: u32) -> Option<Field> {
        self.board.get(x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board symbol of a player: '.' for 0 and for ids outside this game
    pub fn player_symbol(&self, player: u32) -> char {
        self.player(player).map_or(EMPTY_SYMBOL, |_| player_symbol(player))
    }

    /// Render the board, top row (`height - 1`) first.
    ///
    /// Each row holds `width` symbols followed by `'\n'`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfMemory`] when the output buffer cannot be
    /// allocated.
    pub fn render_board(&self) -> Result<String, GameError> {
        let len = (u64::from(self.board.width()) + 1) * u64::from(self.board.height());
        let len = usize::try_from(len).map_err(|_| GameError::OutOfMemory)?;

        let mut out = String::new();
        out.try_reserve_exact(len)
            .map_err(|_| GameError::OutOfMemory)?;
        // Writing into a String cannot fail.
        let _ = self.write_rows(&mut out);
        Ok(out)
    }

    fn write_rows(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for y in (0..self.board.height()).rev() {
            for field in self.board.row(y) {
                out.write_char(field.owner().map_or(EMPTY_SYMBOL, PlayerId::symbol))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rows(f)
    }
}
