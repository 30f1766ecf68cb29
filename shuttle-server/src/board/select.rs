//! Upcoming-departure selection.
//!
//! The sole query the presentation layer makes: given a timetable and the
//! current time, which departures are still ahead of us, and how far?

use crate::domain::{Schedule, ServiceTime};

/// One upcoming departure, relative to a fixed "now".
///
/// Ephemeral: computed fresh on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    /// The published departure time.
    pub time: ServiceTime,

    /// Seconds from "now" until this departure. Never negative.
    pub seconds_until: u32,
}

impl Departure {
    /// Whole minutes until departure, truncated.
    pub fn minutes_until(&self) -> u32 {
        self.seconds_until / 60
    }
}

/// Returns the next `count` departures at or after `now`, soonest first.
///
/// Both `now` and every schedule entry are compared by service-day
/// position, so departures after midnight are correctly seen as minutes
/// away from a late-evening "now" rather than a day away. Entries already
/// departed this service day are dropped; ties keep published order.
///
/// An empty result is not an error: it means no more service today.
///
/// # Examples
///
/// ```
/// use shuttle_server::board::next_departures;
/// use shuttle_server::domain::{Schedule, ServiceTime};
///
/// let schedule = Schedule::from_strs(&["23:53", "0:23", "1:23"]).unwrap();
/// let now = ServiceTime::parse("0:10").unwrap();
///
/// let next = next_departures(&schedule, now, 2);
/// assert_eq!(next[0].time.to_string(), "0:23");
/// assert_eq!(next[0].seconds_until, 780);
/// assert_eq!(next[1].time.to_string(), "1:23");
/// ```
pub fn next_departures(schedule: &Schedule, now: ServiceTime, count: usize) -> Vec<Departure> {
    let now_adj = i64::from(now.service_day_seconds());

    let mut upcoming: Vec<Departure> = schedule
        .times()
        .iter()
        .filter_map(|&t| {
            let diff = i64::from(t.service_day_seconds()) - now_adj;
            if diff >= 0 {
                Some(Departure {
                    time: t,
                    seconds_until: diff as u32,
                })
            } else {
                None
            }
        })
        .collect();

    // Stable: equal diffs keep the published schedule order.
    upcoming.sort_by_key(|d| d.seconds_until);
    upcoming.truncate(count);
    upcoming
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn any_time()(hour in 0u32..24, minute in 0u32..60) -> ServiceTime {
            ServiceTime::from_hms(hour, minute, 0).unwrap()
        }
    }

    prop_compose! {
        fn any_schedule()(times in prop::collection::vec(any_time(), 0..40)) -> Schedule {
            Schedule::new(times)
        }
    }

    proptest! {
        /// At most `count` results, all non-negative, sorted ascending.
        #[test]
        fn results_bounded_and_sorted(
            schedule in any_schedule(),
            now in any_time(),
            count in 0usize..6
        ) {
            let next = next_departures(&schedule, now, count);
            prop_assert!(next.len() <= count);
            for pair in next.windows(2) {
                prop_assert!(pair[0].seconds_until <= pair[1].seconds_until);
            }
        }

        /// Every result really is at or after "now" in service-day terms.
        #[test]
        fn results_not_in_past(schedule in any_schedule(), now in any_time()) {
            for d in next_departures(&schedule, now, usize::MAX) {
                prop_assert!(d.time.service_day_seconds() >= now.service_day_seconds());
                prop_assert_eq!(
                    d.seconds_until,
                    d.time.service_day_seconds() - now.service_day_seconds()
                );
            }
        }

        /// The input schedule is never mutated.
        #[test]
        fn schedule_untouched(schedule in any_schedule(), now in any_time()) {
            let before = schedule.clone();
            let _ = next_departures(&schedule, now, 2);
            prop_assert_eq!(schedule, before);
        }
    }
}
