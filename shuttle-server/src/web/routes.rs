//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::{Local, Timelike};
use tower_http::services::ServeDir;

use crate::board::{Urgency, format_countdown, next_departures};
use crate::domain::{Direction, ServiceTime};
use crate::schedules::Route;

use super::dto::{AppError, BoardQuery, BoardResponse, DepartureDto};
use super::state::AppState;
use super::templates::{BoardTemplate, NextDepartureView, urgency_color};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/health", get(health))
        .route("/api/board", get(board_json))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve free-form stop/direction input against the registry.
///
/// Riders mistype parameters; an unknown stop or direction falls back to
/// the documented defaults rather than erroring.
fn resolve_route<'a>(
    state: &'a AppState,
    query: &BoardQuery,
) -> (String, Direction, &'a Route) {
    let direction = query
        .direction
        .as_deref()
        .and_then(|s| Direction::parse(s).ok())
        .unwrap_or_else(|| state.registry.default_direction());

    let stop = query
        .stop
        .as_deref()
        .unwrap_or_else(|| state.registry.default_stop());

    if let Some(route) = state.registry.get(stop, direction) {
        return (stop.to_owned(), direction, route);
    }

    // Unknown stop, or a stop that does not serve this direction: fall
    // back fully. The registry validates that its defaults resolve.
    let direction = state.registry.default_direction();
    let stop = state.registry.default_stop().to_owned();
    let route = state
        .registry
        .get(&stop, direction)
        .expect("registry guarantees a route for its own defaults");
    (stop, direction, route)
}

/// Determine "now": the pinned `at` parameter if given, else the clock.
fn resolve_now(query: &BoardQuery) -> Result<ServiceTime, AppError> {
    match query.at.as_deref() {
        Some(raw) => ServiceTime::parse(raw).map_err(|e| AppError::BadRequest {
            message: format!("invalid at={raw:?}: {e}"),
        }),
        None => {
            let now = Local::now().time();
            ServiceTime::from_hms(now.hour(), now.minute(), now.second()).map_err(|e| {
                AppError::BadRequest {
                    message: format!("system clock out of range: {e}"),
                }
            })
        }
    }
}

/// The board page: countdown to the next shuttle, HTML with meta-refresh.
async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (stop, direction, route) = resolve_route(&state, &query);
    let now = resolve_now(&query)?;

    let departures = next_departures(&route.schedule, now, state.config.departure_count);
    tracing::debug!(%stop, %direction, %now, upcoming = departures.len(), "board query");

    let next = departures.first().map(|first| NextDepartureView {
        countdown: format_countdown(first.seconds_until),
        color: urgency_color(Urgency::for_minutes(first.minutes_until())),
        departs: first.time.clock_12h(),
        then: departures.get(1).map(|d| d.time.clock_12h()),
    });

    let page = BoardTemplate {
        label: route.label.clone(),
        refresh_secs: state.config.refresh_secs,
        next,
    };

    Ok(Html(
        page.render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    ))
}

/// The board as JSON, for anything that is not a browser.
async fn board_json(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let (stop, direction, route) = resolve_route(&state, &query);
    let now = resolve_now(&query)?;

    let departures = next_departures(&route.schedule, now, state.config.departure_count);
    tracing::debug!(%stop, %direction, %now, upcoming = departures.len(), "board query");

    Ok(Json(BoardResponse {
        stop,
        direction: direction.to_string(),
        label: route.label.clone(),
        departures: departures.iter().map(DepartureDto::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use crate::schedules::from_json;

    fn test_state() -> AppState {
        let registry = from_json(
            r#"{
                "default_direction": "west",
                "stops": [
                    {
                        "id": "covered-bridge",
                        "routes": [
                            { "direction": "west", "label": "Beaver Creek",
                              "times": ["5:38", "6:23", "6:43", "23:53", "0:23", "1:23"] },
                            { "direction": "east", "label": "Vail",
                              "times": ["5:27", "5:47", "23:47", "0:27"] }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        AppState::new(registry, BoardConfig::default())
    }

    fn query(stop: Option<&str>, direction: Option<&str>, at: Option<&str>) -> BoardQuery {
        BoardQuery {
            stop: stop.map(str::to_owned),
            direction: direction.map(str::to_owned),
            at: at.map(str::to_owned),
        }
    }

    #[test]
    fn resolves_known_direction_case_insensitively() {
        let state = test_state();
        let (_, direction, route) = resolve_route(&state, &query(None, Some(" EAST "), None));
        assert_eq!(direction, Direction::East);
        assert_eq!(route.label, "Vail");
    }

    #[test]
    fn unknown_direction_falls_back_to_default() {
        let state = test_state();
        let (_, direction, route) = resolve_route(&state, &query(None, Some("north"), None));
        assert_eq!(direction, Direction::West);
        assert_eq!(route.label, "Beaver Creek");
    }

    #[test]
    fn missing_everything_uses_defaults() {
        let state = test_state();
        let (stop, direction, route) = resolve_route(&state, &query(None, None, None));
        assert_eq!(stop, "covered-bridge");
        assert_eq!(direction, Direction::West);
        assert_eq!(route.label, "Beaver Creek");
    }

    #[test]
    fn unknown_stop_falls_back_to_default() {
        let state = test_state();
        let (stop, _, _) = resolve_route(&state, &query(Some("nowhere"), None, None));
        assert_eq!(stop, "covered-bridge");
    }

    #[test]
    fn pinned_now_is_parsed() {
        let now = resolve_now(&query(None, None, Some("5:40"))).unwrap();
        assert_eq!(now.to_string(), "5:40");

        assert!(resolve_now(&query(None, None, Some("25:00"))).is_err());
    }

    #[tokio::test]
    async fn board_json_happy_path() {
        let state = test_state();
        let Json(body) = board_json(
            State(state),
            Query(query(None, Some("west"), Some("5:40"))),
        )
        .await
        .unwrap();

        assert_eq!(body.label, "Beaver Creek");
        assert_eq!(body.departures.len(), 2);
        assert_eq!(body.departures[0].time, "6:23");
        assert_eq!(body.departures[0].seconds_until, 2580);
        assert_eq!(body.departures[0].countdown, "43m");
        assert_eq!(body.departures[1].time, "6:43");
    }

    #[tokio::test]
    async fn board_json_crosses_midnight() {
        let state = test_state();
        let Json(body) = board_json(
            State(state),
            Query(query(None, Some("west"), Some("0:10"))),
        )
        .await
        .unwrap();

        assert_eq!(body.departures[0].time, "0:23");
        assert_eq!(body.departures[0].seconds_until, 780);
        assert_eq!(body.departures[1].time, "1:23");
    }

    #[tokio::test]
    async fn board_json_no_more_service() {
        let state = test_state();
        let Json(body) = board_json(
            State(state),
            Query(query(None, Some("west"), Some("2:00"))),
        )
        .await
        .unwrap();

        assert!(body.departures.is_empty());
    }
}
