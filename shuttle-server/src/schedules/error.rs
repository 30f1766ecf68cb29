//! Schedule configuration errors.

use crate::domain::{Direction, MalformedTime};

/// Errors raised while loading and validating the schedule file.
///
/// All of these are fatal at startup: a board serving a half-validated
/// timetable is worse than one that refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the schedule file
    #[error("failed to read schedule file: {0}")]
    Io(#[from] std::io::Error),

    /// The schedule file is not valid JSON for the expected shape
    #[error("failed to parse schedule file: {0}")]
    Json(#[from] serde_json::Error),

    /// A timetable entry is not a valid "H:MM" time
    #[error("bad time {value:?} for stop {stop:?} direction {direction}: {source}")]
    BadTime {
        stop: String,
        direction: Direction,
        value: String,
        source: MalformedTime,
    },

    /// The same (stop, direction) appears twice
    #[error("duplicate route for stop {stop:?} direction {direction}")]
    DuplicateRoute { stop: String, direction: Direction },

    /// The file defines no stops at all
    #[error("schedule file defines no stops")]
    NoStops,

    /// The default stop has no route for the default direction
    #[error("default stop {stop:?} has no route for default direction {direction}")]
    MissingDefaultRoute { stop: String, direction: Direction },
}
