use crate::types::ConfigError;

/// Errors that can occur while building or rendering a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("out of memory")]
    OutOfMemory,
}

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("player {0} is not part of this game")]
    InvalidPlayer(u32),

    #[error("field ({x}, {y}) is outside the board")]
    OutOfBounds { x: u32, y: u32 },

    #[error("field ({x}, {y}) is already taken")]
    Occupied { x: u32, y: u32 },

    #[error("player {player} already owns {limit} areas")]
    AreaLimit { player: u32, limit: u32 },
}

impl MoveError {
    /// Short machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            MoveError::InvalidPlayer(_) => "invalid_player",
            MoveError::OutOfBounds { .. } => "out_of_bounds",
            MoveError::Occupied { .. } => "occupied",
            MoveError::AreaLimit { .. } => "area_limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::from(ConfigError::NoAreas);
        assert_eq!(
            err.to_string(),
            "invalid game configuration: area limit must be non-zero"
        );
        assert_eq!(GameError::OutOfMemory.to_string(), "out of memory");
    }

    #[test]
    fn test_move_error_display_and_code() {
        let err = MoveError::AreaLimit {
            player: 2,
            limit: 3,
        };
        assert_eq!(err.to_string(), "player 2 already owns 3 areas");
        assert_eq!(err.code(), "area_limit");
        assert_eq!(MoveError::Occupied { x: 1, y: 4 }.code(), "occupied");
    }
}
