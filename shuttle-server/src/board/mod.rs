//! The departure board engine.
//!
//! Pure functions over validated domain types: pick the next departures
//! for a timetable and render them for display. No clock reads and no
//! I/O happen here; callers supply "now".

mod config;
mod format;
mod select;

pub use config::BoardConfig;
pub use format::{Urgency, format_countdown};
pub use select::{Departure, next_departures};
