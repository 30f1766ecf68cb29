//! Askama templates for the board page.

use askama::Template;

use crate::board::Urgency;

/// The departure board page.
///
/// When `next` is `None` the template renders the "No more buses" state.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    /// Destination label (e.g. "Beaver Creek").
    pub label: String,

    /// Seconds between browser refreshes.
    pub refresh_secs: u32,

    /// The next departure, if any.
    pub next: Option<NextDepartureView>,
}

/// View model for the headline departure.
pub struct NextDepartureView {
    /// Countdown string, "37m" or "1:05".
    pub countdown: String,

    /// CSS colour for the countdown.
    pub color: &'static str,

    /// 12-hour clock time of this departure, "h:MMa".
    pub departs: String,

    /// 12-hour clock time of the one after, if any.
    pub then: Option<String>,
}

/// Map an urgency tier to its display colour: green, amber, red.
pub fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Ample => "#22c55e",
        Urgency::Soon => "#eab308",
        Urgency::Urgent => "#ef4444",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_per_tier() {
        assert_eq!(urgency_color(Urgency::Ample), "#22c55e");
        assert_eq!(urgency_color(Urgency::Soon), "#eab308");
        assert_eq!(urgency_color(Urgency::Urgent), "#ef4444");
    }

    #[test]
    fn board_renders_departure() {
        let page = BoardTemplate {
            label: "Beaver Creek".into(),
            refresh_secs: 300,
            next: Some(NextDepartureView {
                countdown: "43m".into(),
                color: "#22c55e",
                departs: "6:23a".into(),
                then: Some("6:43a".into()),
            }),
        };

        let html = page.render().unwrap();
        assert!(html.contains("43m"));
        assert!(html.contains("Departs 6:23a"));
        assert!(html.contains("Then 6:43a"));
        assert!(html.contains("content=\"300\""));
    }

    #[test]
    fn board_renders_no_service() {
        let page = BoardTemplate {
            label: "Vail".into(),
            refresh_secs: 300,
            next: None,
        };

        let html = page.render().unwrap();
        assert!(html.contains("No more buses"));
        assert!(!html.contains("Departs"));
    }
}
