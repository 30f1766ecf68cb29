//! Schedule time handling.
//!
//! Schedule entries are "H:MM" strings (no leading zero on the hour).
//! This module provides a validated time-of-day type that knows about the
//! service day: a shuttle day runs from 05:00 until just past 01:00 the
//! next calendar morning, so times before the 05:00 cutoff belong to the
//! overnight tail of the *current* service day, not its start.

use std::cmp::Ordering;
use std::fmt;

/// Seconds in one calendar day.
pub const SECS_PER_DAY: u32 = 86_400;

/// Service-day cutoff: 05:00 as seconds since midnight.
///
/// A time-of-day strictly below this belongs to the overnight continuation
/// of the current service day. Both "now" and every schedule entry go
/// through the same adjustment before any comparison.
pub const SERVICE_DAY_START_SECS: u32 = 5 * 3600;

/// Error returned when parsing an invalid schedule time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct MalformedTime {
    reason: &'static str,
}

impl MalformedTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A validated wall-clock time within one service day.
///
/// Stores seconds since midnight. Parsing accepts the schedule format
/// "H:MM" (hour 0-23 without a required leading zero, two-digit minutes).
/// Ordering follows service-day position, so `0:23` sorts *after* `23:53`:
///
/// ```
/// use shuttle_server::domain::ServiceTime;
///
/// let late = ServiceTime::parse("23:53").unwrap();
/// let overnight = ServiceTime::parse("0:23").unwrap();
/// assert!(overnight > late);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceTime {
    secs: u32,
}

impl ServiceTime {
    /// Parse a schedule time from "H:MM" format.
    ///
    /// The hour may be one or two digits (0-23); minutes must be exactly
    /// two digits (00-59).
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::ServiceTime;
    ///
    /// assert!(ServiceTime::parse("5:38").is_ok());
    /// assert!(ServiceTime::parse("23:53").is_ok());
    /// assert!(ServiceTime::parse("0:23").is_ok());
    ///
    /// assert!(ServiceTime::parse("538").is_err());
    /// assert!(ServiceTime::parse("24:00").is_err());
    /// assert!(ServiceTime::parse("5:60").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MalformedTime> {
        let (hour_part, minute_part) = s
            .split_once(':')
            .ok_or_else(|| MalformedTime::new("expected H:MM format"))?;

        if hour_part.is_empty() || hour_part.len() > 2 {
            return Err(MalformedTime::new("hour must be one or two digits"));
        }
        let hour =
            parse_digits(hour_part).ok_or_else(|| MalformedTime::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(MalformedTime::new("hour must be 0-23"));
        }

        if minute_part.len() != 2 {
            return Err(MalformedTime::new("minutes must be two digits"));
        }
        let minute =
            parse_digits(minute_part).ok_or_else(|| MalformedTime::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(MalformedTime::new("minute must be 0-59"));
        }

        Ok(Self {
            secs: hour * 3600 + minute * 60,
        })
    }

    /// Create a time from hour/minute/second components.
    ///
    /// Schedule entries have no seconds, but "now" does, and keeping them
    /// makes countdowns truncate instead of rounding a minute early.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, MalformedTime> {
        if hour > 23 {
            return Err(MalformedTime::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(MalformedTime::new("minute must be 0-59"));
        }
        if second > 59 {
            return Err(MalformedTime::new("second must be 0-59"));
        }
        Ok(Self {
            secs: hour * 3600 + minute * 60 + second,
        })
    }

    /// Returns raw seconds since midnight (no service-day adjustment).
    pub fn seconds_since_midnight(&self) -> u32 {
        self.secs
    }

    /// Returns seconds since midnight of the service day's first calendar
    /// day: times before the 05:00 cutoff are shifted forward by 24 hours.
    ///
    /// Without this shift a 00:23 departure would look 23+ hours away from
    /// a 23:50 "now" instead of 33 minutes.
    pub fn service_day_seconds(&self) -> u32 {
        if self.secs < SERVICE_DAY_START_SECS {
            self.secs + SECS_PER_DAY
        } else {
            self.secs
        }
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.secs / 3600
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        (self.secs / 60) % 60
    }

    /// Render as a 12-hour clock string, "h:MMa" or "h:MMp".
    ///
    /// Hours 0 and 12 both render as "12"; the suffix is "a" for hours
    /// before noon and "p" from noon onwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::ServiceTime;
    ///
    /// assert_eq!(ServiceTime::parse("0:23").unwrap().clock_12h(), "12:23a");
    /// assert_eq!(ServiceTime::parse("5:38").unwrap().clock_12h(), "5:38a");
    /// assert_eq!(ServiceTime::parse("12:07").unwrap().clock_12h(), "12:07p");
    /// assert_eq!(ServiceTime::parse("23:53").unwrap().clock_12h(), "11:53p");
    /// ```
    pub fn clock_12h(&self) -> String {
        let suffix = if self.hour() < 12 { 'a' } else { 'p' };
        let mut hour = self.hour() % 12;
        if hour == 0 {
            hour = 12;
        }
        format!("{}:{:02}{}", hour, self.minute(), suffix)
    }
}

impl Ord for ServiceTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.service_day_seconds().cmp(&other.service_day_seconds())
    }
}

impl PartialOrd for ServiceTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

/// Parse a short run of ASCII digits into a u32.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
