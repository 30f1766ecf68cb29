//! Schedule file loading.
//!
//! Timetables are configuration, not code: the operator publishes revised
//! tables often enough that they live in a JSON file next to the binary.
//! The whole file is validated here, once, at startup; a malformed entry
//! is a fatal configuration error, never a per-query condition.
//!
//! File shape:
//!
//! ```json
//! {
//!   "default_direction": "west",
//!   "stops": [
//!     {
//!       "id": "covered-bridge",
//!       "routes": [
//!         { "direction": "west", "label": "Beaver Creek", "times": ["5:38", "6:23"] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Direction, Schedule, ServiceTime};

use super::error::ConfigError;
use super::registry::{Route, ScheduleRegistry};

/// Top-level schedule file.
#[derive(Debug, Deserialize)]
pub struct ScheduleFile {
    /// Direction to fall back to on missing or unknown input.
    #[serde(default = "default_direction")]
    pub default_direction: Direction,

    /// Stops in display-priority order; the first is the default stop.
    pub stops: Vec<StopEntry>,
}

/// One stop and its per-direction routes.
#[derive(Debug, Deserialize)]
pub struct StopEntry {
    /// Stable stop identifier used in request parameters.
    pub id: String,

    /// Routes serving this stop.
    pub routes: Vec<RouteEntry>,
}

/// One route's raw configuration.
#[derive(Debug, Deserialize)]
pub struct RouteEntry {
    pub direction: Direction,
    pub label: String,

    /// Departure times as published, "H:MM" strings in service-day order.
    pub times: Vec<String>,
}

fn default_direction() -> Direction {
    Direction::West
}

/// Load and validate a schedule file into a registry.
pub fn load(path: &Path) -> Result<ScheduleRegistry, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    from_json(&raw)
}

/// Parse and validate schedule JSON into a registry.
pub fn from_json(raw: &str) -> Result<ScheduleRegistry, ConfigError> {
    let file: ScheduleFile = serde_json::from_str(raw)?;
    build(file)
}

fn build(file: ScheduleFile) -> Result<ScheduleRegistry, ConfigError> {
    let mut entries = Vec::new();

    for stop in file.stops {
        for route in stop.routes {
            let mut times = Vec::with_capacity(route.times.len());
            for value in &route.times {
                let time = ServiceTime::parse(value).map_err(|source| ConfigError::BadTime {
                    stop: stop.id.clone(),
                    direction: route.direction,
                    value: value.clone(),
                    source,
                })?;
                times.push(time);
            }

            entries.push((
                stop.id.clone(),
                route.direction,
                Route {
                    label: route.label,
                    schedule: Schedule::new(times),
                },
            ));
        }
    }

    ScheduleRegistry::new(entries, file.default_direction)
}
