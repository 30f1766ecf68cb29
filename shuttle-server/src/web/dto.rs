//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::board::Departure;

/// Query parameters for the board endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Stop identifier (defaults to the registry's first stop)
    pub stop: Option<String>,

    /// Direction, case-insensitive (defaults to the configured direction)
    pub direction: Option<String>,

    /// Pin "now" to an H:MM time instead of the wall clock.
    /// Useful for checking tomorrow morning's board tonight.
    pub at: Option<String>,
}

/// JSON board response.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Resolved stop identifier
    pub stop: String,

    /// Resolved direction
    pub direction: String,

    /// Destination label for the resolved route
    pub label: String,

    /// Upcoming departures, soonest first; empty when service is done
    pub departures: Vec<DepartureDto>,
}

/// One upcoming departure, display-ready.
#[derive(Debug, Serialize)]
pub struct DepartureDto {
    /// Scheduled time as published, "H:MM"
    pub time: String,

    /// 12-hour clock rendering, "h:MMa"
    pub clock: String,

    /// Countdown string, "37m" or "1:05"
    pub countdown: String,

    /// Whole minutes until departure
    pub minutes: u32,

    /// Seconds until departure
    pub seconds_until: u32,

    /// Urgency tier: "urgent", "soon" or "ample"
    pub urgency: String,
}

impl From<&Departure> for DepartureDto {
    fn from(d: &Departure) -> Self {
        use crate::board::{Urgency, format_countdown};

        Self {
            time: d.time.to_string(),
            clock: d.time.clock_12h(),
            countdown: format_countdown(d.seconds_until),
            minutes: d.minutes_until(),
            seconds_until: d.seconds_until,
            urgency: Urgency::for_minutes(d.minutes_until()).to_string(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
