//! Adventure State Library
//!
//! This crate provides state management for a small text adventure.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Area Graph** - Six named areas joined by fixed, ordered edges. Each
//!   area may carry a multiple-choice puzzle.
//!
//! - **Game State Machine** - Tracks the player's current area and whether
//!   the game is still being played, won, or lost, with validated moves.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - Illegal moves are rejected
//!    with a [`MoveError`] and never change the game.
//!
//! 2. **Static graph** - Areas are plain `Copy` values backed by a static
//!    adjacency table; neighbors are matched by name.
//!
//! 3. **No I/O** - This crate is pure state, no terminal or persistence.
//!    Checking a puzzle answer is up to the caller.
//!
//! 4. **Serialization-ready** - Every type can be converted to JSON for a UI.
//!
//! # Example
//!
//! ```rust
//! use adventure_state::{Area, Game, GameStatus, MoveError};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_area().name(), "Forrest");
//!
//! // Only neighbors of the current area are reachable
//! assert!(matches!(
//!     game.move_to_area(Area::Library),
//!     Err(MoveError::InvalidArea { .. })
//! ));
//!
//! for name in ["City", "Library", "EndArea"] {
//!     let area: Area = name.parse().unwrap();
//!     game.move_to_area(area).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Win);
//!
//! // No moves after the game is over
//! assert!(matches!(
//!     game.move_to_area(Area::City),
//!     Err(MoveError::GameOver { .. })
//! ));
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
