//! Validated schedule registry.

use std::collections::HashMap;

use crate::domain::{Direction, Schedule};

use super::error::ConfigError;

/// One route: a destination label plus its timetable.
#[derive(Debug, Clone)]
pub struct Route {
    /// Human-readable destination shown on the board (e.g. "Beaver Creek").
    pub label: String,

    /// The route's daily timetable.
    pub schedule: Schedule,
}

/// All schedules the server knows, keyed by (stop, direction).
///
/// Built once at startup from the schedule file and immutable afterwards.
/// The registry also carries the documented fallbacks: the first stop in
/// the file and its configured default direction, used when a request
/// names an unknown stop or direction.
#[derive(Debug, Clone)]
pub struct ScheduleRegistry {
    routes: HashMap<(String, Direction), Route>,
    default_stop: String,
    default_direction: Direction,
}

impl ScheduleRegistry {
    /// Build a registry from (stop, direction, route) triples.
    ///
    /// The first triple's stop becomes the default stop. Fails on
    /// duplicate (stop, direction) pairs or an empty list.
    pub fn new(
        entries: Vec<(String, Direction, Route)>,
        default_direction: Direction,
    ) -> Result<Self, ConfigError> {
        let default_stop = entries
            .first()
            .map(|(stop, _, _)| stop.clone())
            .ok_or(ConfigError::NoStops)?;

        let mut routes = HashMap::with_capacity(entries.len());
        for (stop, direction, route) in entries {
            if routes
                .insert((stop.clone(), direction), route)
                .is_some()
            {
                return Err(ConfigError::DuplicateRoute { stop, direction });
            }
        }

        // The fallback path must always land on a real route.
        if !routes.contains_key(&(default_stop.clone(), default_direction)) {
            return Err(ConfigError::MissingDefaultRoute {
                stop: default_stop,
                direction: default_direction,
            });
        }

        Ok(Self {
            routes,
            default_stop,
            default_direction,
        })
    }

    /// Look up the route for a stop and direction.
    pub fn get(&self, stop: &str, direction: Direction) -> Option<&Route> {
        self.routes.get(&(stop.to_owned(), direction))
    }

    /// The stop used when a request names none (or an unknown one).
    pub fn default_stop(&self) -> &str {
        &self.default_stop
    }

    /// The direction used when a request names none (or an unknown one).
    pub fn default_direction(&self) -> Direction {
        self.default_direction
    }

    /// Number of routes in the registry.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
