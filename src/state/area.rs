//! The fixed area graph.
//!
//! # Map
//!
//! ```text
//!              ┌─────────┐
//!              │ Forrest │◀─────────────┐
//!              └────┬────┘              │
//!          ┌────────┴────────┐          │
//!          ▼                 ▼          │
//!     ┌─────────┐       ┌─────────┐     │
//!     │  Cave   │       │  City   │─────┘
//!     │ (lose)  │       └────┬────┘
//!     └─────────┘     ┌──────┴──────┐
//!                     ▼             ▼
//!               ┌──────────┐  ┌───────────┐    ┌─────────┐
//!               │  Tower   │  │  Library  │───▶│ EndArea │
//!               │ (riddle) │  │  (math)   │    │  (win)  │
//!               └──────────┘  └───────────┘    └─────────┘
//!              (both lead back to City)
//! ```
//!
//! Edges are stored in a static table, so every `Area` value with a given
//! name has the same puzzle and the same ordered neighbors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::game::GameStatus;
use super::puzzle::Puzzle;

/// Where every new game begins.
pub const START_AREA: Area = Area::Forrest;

const FORREST_EDGES: [Area; 2] = [Area::Cave, Area::City];
const CITY_EDGES: [Area; 3] = [Area::Tower, Area::Library, Area::Forrest];
const TOWER_EDGES: [Area; 1] = [Area::City];
const LIBRARY_EDGES: [Area; 2] = [Area::City, Area::EndArea];

/// A node in the area graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Forrest,
    /// Dead end, entering it loses the game
    Cave,
    City,
    Tower,
    Library,
    /// Goal, entering it wins the game
    EndArea,
}

impl Area {
    /// All areas in map order.
    pub const ALL: [Area; 6] = [
        Area::Forrest,
        Area::Cave,
        Area::City,
        Area::Tower,
        Area::Library,
        Area::EndArea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Forrest => "Forrest",
            Self::Cave => "Cave",
            Self::City => "City",
            Self::Tower => "Tower",
            Self::Library => "Library",
            Self::EndArea => "EndArea",
        }
    }

    /// Look up an area by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.name() == name)
    }

    /// Outgoing edges, in the order they are offered to the player.
    pub fn available_areas(&self) -> &'static [Area] {
        match self {
            Self::Forrest => &FORREST_EDGES,
            Self::City => &CITY_EDGES,
            Self::Tower => &TOWER_EDGES,
            Self::Library => &LIBRARY_EDGES,
            Self::Cave | Self::EndArea => &[],
        }
    }

    pub fn puzzle(&self) -> Puzzle {
        match self {
            Self::Tower => Puzzle::Riddle,
            Self::Library => Puzzle::Math,
            Self::Forrest | Self::Cave | Self::City | Self::EndArea => Puzzle::NoPuzzle,
        }
    }

    /// Check if `target` is one of this area's neighbors.
    ///
    /// Neighbors are matched by name, first match wins.
    pub fn leads_to(&self, target: &Area) -> bool {
        self.available_areas()
            .iter()
            .any(|neighbor| neighbor.name() == target.name())
    }

    /// Status the game ends in when this area is entered, if any.
    pub fn terminal_status(&self) -> Option<GameStatus> {
        match self {
            Self::Cave => Some(GameStatus::Lose),
            Self::EndArea => Some(GameStatus::Win),
            Self::Forrest | Self::City | Self::Tower | Self::Library => None,
        }
    }

    /// Check if entering this area ends the game.
    pub fn is_terminal(&self) -> bool {
        self.terminal_status().is_some()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let neighbors: Vec<&str> = self.available_areas().iter().map(Area::name).collect();
        serde_json::json!({
            "name": self.name(),
            "puzzle": self.puzzle().to_json(),
            "available_areas": neighbors
        })
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an area from a name that is not on the map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown area: {0}")]
pub struct UnknownArea(pub String);

impl FromStr for Area {
    type Err = UnknownArea;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownArea(s.to_string()))
    }
}
