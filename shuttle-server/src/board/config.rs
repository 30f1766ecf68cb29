//! Board configuration.

/// Configuration parameters for the departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// How many upcoming departures to show.
    pub departure_count: usize,

    /// How often the board page asks the browser to reload (seconds).
    pub refresh_secs: u32,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(departure_count: usize, refresh_secs: u32) -> Self {
        Self {
            departure_count,
            refresh_secs,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            departure_count: 2,
            refresh_secs: 300, // 5 minutes
        }
    }
}
