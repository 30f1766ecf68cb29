//! A single route's daily timetable.

use super::time::{MalformedTime, ServiceTime};

/// The ordered departures of one route/direction for one service day.
///
/// The sequence is kept in the order the operator publishes it: read as
/// plain clock times it dips once where service crosses midnight
/// ("23:53" followed by "0:23"). Nothing here requires the input to be
/// pre-sorted; the selector works off service-day positions instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    times: Vec<ServiceTime>,
}

impl Schedule {
    /// Build a schedule from already-validated times.
    pub fn new(times: Vec<ServiceTime>) -> Self {
        Self { times }
    }

    /// Parse and validate a list of "H:MM" strings.
    ///
    /// This is the load-time validation point: a malformed entry here is a
    /// configuration error, reported immediately rather than at query time.
    pub fn from_strs<S: AsRef<str>>(raw: &[S]) -> Result<Self, MalformedTime> {
        let times = raw
            .iter()
            .map(|s| ServiceTime::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { times })
    }

    /// The departures in published order.
    pub fn times(&self) -> &[ServiceTime] {
        &self.times
    }

    /// Number of departures in the timetable.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the timetable has no departures at all.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strs_valid() {
        let s = Schedule::from_strs(&["5:38", "23:53", "0:23", "1:23"]).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.times()[0].to_string(), "5:38");
        assert_eq!(s.times()[2].to_string(), "0:23");
    }

    #[test]
    fn from_strs_rejects_malformed_entry() {
        assert!(Schedule::from_strs(&["5:38", "25:00"]).is_err());
        assert!(Schedule::from_strs(&["5:38", "nope"]).is_err());
    }

    #[test]
    fn empty_schedule_is_valid() {
        let s = Schedule::from_strs::<&str>(&[]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
