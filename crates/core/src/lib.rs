//! Core game logic - the area-merge and boundary-accounting engine
//!
//! Players claim fields on a grid. Orthogonally adjacent fields of one player
//! form an *area*, and each player may hold only a limited number of areas. After
//! every move the engine knows, in constant time, how many fields a player could
//! still claim, because every counter is updated incrementally by the move itself.
//!
//! The crate has **no I/O**: front ends live in `gamma-engine` and `gamma-term`.
//!
//! # Module Structure
//!
//! - [`board`]: flat `width x height` field storage with bounds-checked access
//! - [`adjacency`]: neighbour counts, distance-2 and diagonal-pinch corrections
//! - [`merge`]: work-list relabeling of a region when areas merge
//! - [`game`]: move validation and classification, counters, queries, rendering
//! - [`error`]: construction and move rejection errors
//!
//! # Move Rules
//!
//! - A field is claimed once and never changes owner
//! - A move with no same-player neighbour opens a new area, which is refused once
//!   the player holds the maximum number of areas
//! - A move next to one area extends it; a move next to several merges them
//!
//! # Example
//!
//! ```
//! use gamma_core::Game;
//!
//! let mut game = Game::new(10, 10, 2, 3).unwrap();
//! assert!(game.place_marker(1, 0, 0));
//! assert!(!game.place_marker(2, 0, 0)); // taken
//!
//! assert_eq!(game.owned_field_count(1), 1);
//! assert_eq!(game.free_field_count(2), 99);
//! assert_eq!(game.player_symbol(2), '2');
//! ```

pub mod adjacency;
pub mod board;
pub mod error;
pub mod game;
pub mod merge;

pub use gamma_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Field, Pos};
pub use error::{GameError, MoveError};
pub use game::{Game, MoveKind, PlayerState};
