//! Difficulty levels for puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// An unrecognized difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {name:?}")]
pub struct ParseDifficultyError {
    /// The rejected name.
    pub name: String,
}

/// Requested difficulty of a generated puzzle.
///
/// Difficulty selects the clue budget the generator digs toward; it does not
/// grade the solving techniques the result demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// The most clues.
    Easy,
    /// The default.
    Medium,
    /// Fewer clues.
    Hard,
    /// The fewest clues.
    Expert,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}
