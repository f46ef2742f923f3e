//! Interactive session - cursor, turn order and end of game
//!
//! Players take turns in order 1, 2, ... A player with no field left to claim is
//! skipped; the session is over once nobody can move.

use tracing::debug;

use gamma_core::{Game, GameError, MoveError, MoveKind};
use gamma_types::{ConfigError, CursorAction, GameConfig, PlayerId};

/// Result of applying one [`CursorAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Cursor moved (or stayed at an edge)
    Moved,
    Placed(MoveKind),
    /// Move refused; the same player keeps the turn
    Rejected(MoveError),
    Skipped,
    /// The session is already over
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    cursor: (u32, u32),
    current: PlayerId,
    over: bool,
}

impl Session {
    /// Start a session with the cursor in the middle of the board.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let game = Game::from_config(config)?;
        // Valid configs have at least one player.
        let current = game
            .player(1)
            .ok_or(GameError::InvalidConfig(ConfigError::NoPlayers))?;
        Ok(Self {
            cursor: (game.board_width() / 2, game.board_height() / 2),
            current,
            over: false,
            game,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn cursor(&self) -> (u32, u32) {
        self.cursor
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn apply(&mut self, action: CursorAction) -> ActionOutcome {
        if self.over {
            return ActionOutcome::Ignored;
        }

        let (x, y) = self.cursor;
        let max_x = self.game.board_width() - 1;
        let max_y = self.game.board_height() - 1;
        match action {
            CursorAction::Left => self.cursor.0 = x.saturating_sub(1),
            CursorAction::Right => self.cursor.0 = (x + 1).min(max_x),
            CursorAction::Down => self.cursor.1 = y.saturating_sub(1),
            CursorAction::Up => self.cursor.1 = (y + 1).min(max_y),
            CursorAction::Place => {
                return match self.game.try_place(self.current.get(), x, y) {
                    Ok(kind) => {
                        self.advance_turn();
                        ActionOutcome::Placed(kind)
                    }
                    Err(e) => ActionOutcome::Rejected(e),
                };
            }
            CursorAction::Skip => {
                self.advance_turn();
                return ActionOutcome::Skipped;
            }
        }
        ActionOutcome::Moved
    }

    /// Hand the turn to the next player who can still move.
    fn advance_turn(&mut self) {
        let count = self.game.player_count();
        let start = self.current.get();
        for step in 1..=count {
            let raw = (start - 1 + step) % count + 1;
            if self.game.free_field_count(raw) > 0 {
                if let Some(next) = self.game.player(raw) {
                    self.current = next;
                    return;
                }
            }
        }
        debug!("no player can move, session over");
        self.over = true;
    }

    /// `(symbol, owned fields)` for every player, in player order
    pub fn summary(&self) -> Vec<(char, u64)> {
        (1..=self.game.player_count())
            .map(|p| (self.game.player_symbol(p), self.game.owned_field_count(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(w: u32, h: u32, players: u32, areas: u32) -> Session {
        Session::new(&GameConfig::new(w, h, players, areas)).unwrap()
    }

    #[test]
    fn test_cursor_starts_centered_and_clamps() {
        let mut s = session(3, 2, 2, 1);
        assert_eq!(s.cursor(), (1, 1));

        s.apply(CursorAction::Up);
        assert_eq!(s.cursor(), (1, 1));
        s.apply(CursorAction::Right);
        s.apply(CursorAction::Right);
        assert_eq!(s.cursor(), (2, 1));
        s.apply(CursorAction::Down);
        s.apply(CursorAction::Down);
        s.apply(CursorAction::Left);
        assert_eq!(s.cursor(), (1, 0));
    }

    #[test]
    fn test_turns_rotate_and_rejections_keep_the_turn() {
        let mut s = session(3, 3, 2, 1);
        assert_eq!(s.current_player().get(), 1);
        assert!(matches!(
            s.apply(CursorAction::Place),
            ActionOutcome::Placed(MoveKind::NewArea { area: 1 })
        ));
        assert_eq!(s.current_player().get(), 2);

        assert_eq!(
            s.apply(CursorAction::Place),
            ActionOutcome::Rejected(MoveError::Occupied { x: 1, y: 1 })
        );
        assert_eq!(s.current_player().get(), 2);

        assert_eq!(s.apply(CursorAction::Skip), ActionOutcome::Skipped);
        assert_eq!(s.current_player().get(), 1);
    }

    #[test]
    fn test_session_ends_when_board_fills() {
        let mut s = session(1, 2, 2, 1);
        assert_eq!(s.cursor(), (0, 1));
        s.apply(CursorAction::Place);
        s.apply(CursorAction::Down);
        assert!(matches!(s.apply(CursorAction::Place), ActionOutcome::Placed(_)));
        assert!(s.is_over());
        assert_eq!(s.apply(CursorAction::Skip), ActionOutcome::Ignored);
        assert_eq!(s.summary(), vec![('1', 1), ('2', 1)]);
    }

    #[test]
    fn test_blocked_player_is_skipped() {
        // Player 1 holds its only area in a corner that player 2 walls in.
        let mut s = session(3, 1, 2, 1);
        s.apply(CursorAction::Left); // (0, 0)
        s.apply(CursorAction::Place); // 1 at (0, 0)
        s.apply(CursorAction::Right);
        s.apply(CursorAction::Place); // 2 at (1, 0)
        assert_eq!(s.game().free_field_count(1), 0);
        assert_eq!(s.current_player().get(), 2);
    }
}
