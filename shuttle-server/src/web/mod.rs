//! Web layer: router, handlers, templates, and DTOs.

mod dto;
mod routes;
mod state;
mod templates;

pub use dto::{BoardQuery, BoardResponse, DepartureDto};
pub use routes::create_router;
pub use state::AppState;
