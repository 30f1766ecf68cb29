//! Route direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown direction string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?}")]
pub struct UnknownDirection(pub String);

/// Which way the shuttle is headed.
///
/// Selected by the rider via a request parameter. Matching is
/// case-insensitive and ignores surrounding whitespace; callers that
/// receive free-form input should fall back to a default rather than
/// fail:
///
/// ```
/// use shuttle_server::domain::Direction;
///
/// assert_eq!(Direction::parse(" West "), Ok(Direction::West));
/// assert_eq!(Direction::parse("EAST"), Ok(Direction::East));
/// assert!(Direction::parse("north").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    West,
    East,
}

impl Direction {
    /// Parse a direction, case-insensitively, trimming whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownDirection> {
        match s.trim().to_ascii_lowercase().as_str() {
            "west" => Ok(Direction::West),
            "east" => Ok(Direction::East),
            _ => Err(UnknownDirection(s.to_owned())),
        }
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
