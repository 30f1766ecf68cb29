//! Schedule configuration: file format, validation, and the registry.

mod error;
mod file;
mod registry;

pub use error::ConfigError;
pub use file::{from_json, load};
pub use registry::{Route, ScheduleRegistry};
