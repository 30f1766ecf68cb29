//! Domain types for the shuttle departure board.
//!
//! These types represent validated schedule data. All of them enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod direction;
mod schedule;
mod time;

pub use direction::{Direction, UnknownDirection};
pub use schedule::Schedule;
pub use time::{MalformedTime, SECS_PER_DAY, SERVICE_DAY_START_SECS, ServiceTime};
