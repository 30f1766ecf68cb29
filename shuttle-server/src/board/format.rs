//! Countdown rendering and urgency tiers.

use std::fmt;

/// Render a non-negative duration as a short countdown string.
///
/// Whole minutes only, truncated: under an hour it is `"37m"`, from an
/// hour up it is `"1:05"`. Seconds are never shown, so 59m59s still
/// renders as "59m".
///
/// # Examples
///
/// ```
/// use shuttle_server::board::format_countdown;
///
/// assert_eq!(format_countdown(2580), "43m");
/// assert_eq!(format_countdown(7500), "2:05");
/// ```
pub fn format_countdown(seconds_until: u32) -> String {
    let minutes = seconds_until / 60;
    if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }
}

/// How urgently the rider needs to move.
///
/// A display classification of the countdown; what colour each tier gets
/// is the presentation layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Less than 5 minutes: run.
    Urgent,
    /// 5 to 9 minutes: get moving.
    Soon,
    /// 10 minutes or more: relax.
    Ample,
}

impl Urgency {
    /// Classify a countdown, given whole minutes (truncated from seconds,
    /// matching [`format_countdown`]'s rounding).
    pub fn for_minutes(minutes: u32) -> Self {
        if minutes >= 10 {
            Urgency::Ample
        } else if minutes >= 5 {
            Urgency::Soon
        } else {
            Urgency::Urgent
        }
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Soon => "soon",
            Urgency::Ample => "ample",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_under_an_hour() {
        assert_eq!(format_countdown(0), "0m");
        assert_eq!(format_countdown(59), "0m");
        assert_eq!(format_countdown(60), "1m");
        assert_eq!(format_countdown(2580), "43m");
        // 59m59s is still "59m", never "1:00"
        assert_eq!(format_countdown(3599), "59m");
    }

    #[test]
    fn countdown_an_hour_and_up() {
        assert_eq!(format_countdown(3600), "1:00");
        assert_eq!(format_countdown(3900), "1:05");
        assert_eq!(format_countdown(7500), "2:05");
        assert_eq!(format_countdown(10 * 3600), "10:00");
    }

    #[test]
    fn urgency_boundaries() {
        assert_eq!(Urgency::for_minutes(10), Urgency::Ample);
        assert_eq!(Urgency::for_minutes(9), Urgency::Soon);
        assert_eq!(Urgency::for_minutes(5), Urgency::Soon);
        assert_eq!(Urgency::for_minutes(4), Urgency::Urgent);
        assert_eq!(Urgency::for_minutes(0), Urgency::Urgent);
        assert_eq!(Urgency::for_minutes(500), Urgency::Ample);
    }

    #[test]
    fn urgency_display() {
        assert_eq!(Urgency::Urgent.to_string(), "urgent");
        assert_eq!(Urgency::Soon.to_string(), "soon");
        assert_eq!(Urgency::Ample.to_string(), "ample");
    }
}
