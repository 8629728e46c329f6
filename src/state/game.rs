//! Game session state machine.
//!
//! # State Diagram
//!
//! ```text
//!                 move_to_area (legal, non-terminal)
//!                        ┌──────────┐
//!                        ▼          │
//!                  ┌───────────┐    │
//!   Game::new ───▶ │  Playing  │────┘
//!                  └─────┬─────┘
//!            enter Cave  │  enter EndArea
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!      ┌───────────┐           ┌───────────┐
//!      │   Lose    │           │    Win    │
//!      └───────────┘           └───────────┘
//! ```
//!
//! `Win` and `Lose` are final: every further move is rejected with
//! [`MoveError::GameOver`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::area::{Area, START_AREA};

/// Game state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Player is still moving around
    #[default]
    Playing,
    /// Player reached the end area
    Win,
    /// Player walked into the cave
    Lose,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }

    /// Check if the game still accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the game is over (cannot change).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a move is rejected. The game is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Game over: status is {status}")]
    GameOver { status: GameStatus },

    #[error("Invalid area: {to} is not reachable from {from}")]
    InvalidArea { from: Area, to: Area },
}

/// A single play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    status: GameStatus,

    current_area: Area,

    /// Every area entered, starting with the start area
    history: Vec<Area>,

    /// When the session was created
    created_at: DateTime<Utc>,

    /// When the status became terminal
    ended_at: Option<DateTime<Utc>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a new game in the forest.
    #[instrument]
    pub fn new() -> Self {
        debug!(area = %START_AREA, "starting new game");
        Self {
            status: GameStatus::Playing,
            current_area: START_AREA,
            history: vec![START_AREA],
            created_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_area(&self) -> Area {
        self.current_area
    }

    /// Areas entered so far, oldest first.
    pub fn history(&self) -> &[Area] {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Move to `target`, returning the resulting game or an error.
    pub fn try_move(&self, target: Area) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.move_to_area(target)?;
        Ok(next)
    }

    /// Move to `target` in place.
    ///
    /// The target must be a neighbor of the current area, matched by name.
    /// Entering the cave loses the game and entering the end area wins it.
    /// Puzzles never block a move.
    #[instrument(skip(self), fields(from = %self.current_area, to = %target))]
    pub fn move_to_area(&mut self, target: Area) -> Result<(), MoveError> {
        let status = self.transition(target)?;

        self.current_area = target;
        self.history.push(target);
        self.status = status;
        info!(status = %status, "moved");

        if status.is_terminal() {
            self.ended_at = Some(Utc::now());
            info!(status = %status, moves = self.history.len() - 1, "game over");
        }

        Ok(())
    }

    /// Calculate the status after moving to `target`.
    fn transition(&self, target: Area) -> Result<GameStatus, MoveError> {
        if !self.status.is_active() {
            debug!(status = %self.status, "move rejected, game is over");
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }

        if !self.current_area.leads_to(&target) {
            debug!("move rejected, area not reachable");
            return Err(MoveError::InvalidArea {
                from: self.current_area,
                to: target,
            });
        }

        Ok(target.terminal_status().unwrap_or(self.status))
    }

    /// Snapshot for rendering a prompt.
    pub fn to_json(&self) -> serde_json::Value {
        let puzzle = self.current_area.puzzle();
        let history: Vec<&str> = self.history.iter().map(Area::name).collect();
        let neighbors: Vec<&str> = self
            .current_area
            .available_areas()
            .iter()
            .map(Area::name)
            .collect();

        serde_json::json!({
            "status": self.status.as_str(),
            "current_area": {
                "name": self.current_area.name(),
                "question": puzzle.question(),
                "choices": puzzle.choices(),
                "available_areas": neighbors
            },
            "history": history,
            "created_at": self.created_at.to_rfc3339(),
            "ended_at": self.ended_at.map(|t| t.to_rfc3339())
        })
    }
}
