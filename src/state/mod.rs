//! State management module for the adventure.
//!
//! This module provides the core state types:
//!
//! - `puzzle` - Multiple-choice puzzles (informational only)
//! - `area` - The fixed area graph and its puzzles
//! - `game` - Session state machine (where is the player, is the game over?)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            Game                               │
//! │                                                               │
//! │   status: Playing ──▶ Win / Lose                              │
//! │   current_area ─────────────┐                                 │
//! │   history                   │                                 │
//! │                             ▼                                 │
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │                  Area (static graph)                    │   │
//! │  │                                                         │   │
//! │  │  name  ──▶  available_areas: &'static [Area]            │   │
//! │  │        ──▶  puzzle: Puzzle (Math / Riddle / NoPuzzle)   │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use adventure_state::state::{Area, Game, GameStatus, MoveError};
//!
//! let mut game = Game::new();
//! game.move_to_area(Area::City)?;
//!
//! // Puzzles are shown to the player but never enforced
//! game.move_to_area(Area::Tower)?;
//! assert_eq!(game.current_area().puzzle().answer(), "Sky");
//!
//! assert!(game.move_to_area(Area::EndArea).is_err());
//! assert_eq!(game.status(), GameStatus::Playing);
//! # Ok::<(), MoveError>(())
//! ```

pub mod area;
pub mod game;
pub mod puzzle;

// Re-export commonly used types
pub use area::{Area, UnknownArea, START_AREA};
pub use game::{Game, GameStatus, MoveError};
pub use puzzle::{Puzzle, CHOICES_PER_PUZZLE};
