//! Multiple-choice puzzles attached to areas.
//!
//! Puzzles are informational only. The game never checks an answer; a caller
//! that wants to quiz the player compares the chosen string against
//! [`Puzzle::answer`] itself.

use serde::{Deserialize, Serialize};

/// Number of choices offered by every active puzzle.
pub const CHOICES_PER_PUZZLE: usize = 3;

const MATH_CHOICES: [&str; CHOICES_PER_PUZZLE] = ["1", "3", "2"];
const RIDDLE_CHOICES: [&str; CHOICES_PER_PUZZLE] = ["Earth", "Sky", "Summer"];

/// A puzzle guarding an area, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Puzzle {
    /// Simple arithmetic question
    Math,
    /// Word riddle
    Riddle,
    /// Empty question, no choices
    NoPuzzle,
}

impl Puzzle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Riddle => "riddle",
            Self::NoPuzzle => "none",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Self::Math => "What is 1 + 1?",
            Self::Riddle => "What is blue?",
            Self::NoPuzzle => "",
        }
    }

    /// Choices in presentation order.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Math => &MATH_CHOICES,
            Self::Riddle => &RIDDLE_CHOICES,
            Self::NoPuzzle => &[],
        }
    }

    /// The correct choice. Always one of [`Puzzle::choices`] for an active puzzle.
    pub fn answer(&self) -> &'static str {
        match self {
            Self::Math => "2",
            Self::Riddle => "Sky",
            Self::NoPuzzle => "",
        }
    }

    /// Check if this puzzle actually asks something.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::NoPuzzle)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.as_str(),
            "question": self.question(),
            "choices": self.choices(),
            "answer": self.answer()
        })
    }
}
