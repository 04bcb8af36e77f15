use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Timelike, Utc};

use crate::error::{Result, ScheduleError};
use crate::schedule::ScheduleExpression;

/// How far past the reference instant the scan looks before declaring the
/// expression unsatisfiable. Four years covers every leap-day combination.
pub const SEARCH_HORIZON_DAYS: i64 = 4 * 366;

impl ScheduleExpression {
    /// First occurrence strictly after `after`, at minute resolution.
    ///
    /// The scan starts at `after` truncated to the minute plus one minute
    /// and jumps over whole months, days, and hours that cannot match.
    pub fn next_after(&self, after: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let horizon = after + Duration::days(SEARCH_HORIZON_DAYS);
        let mut candidate = match next_minute(after) {
            Some(t) => t,
            None => return Err(self.unsatisfiable()),
        };

        while candidate <= horizon {
            let jump = if !self.month().matches(candidate.month()) {
                start_of_next_month(candidate)
            } else if !day_matches(self, candidate) {
                start_of_next_day(candidate)
            } else if !self.hour().matches(candidate.hour()) {
                start_of_next_hour(candidate)
            } else if !self.minute().matches(candidate.minute()) {
                next_minute(candidate)
            } else {
                return Ok(candidate);
            };

            candidate = match jump {
                Some(t) => t,
                None => break,
            };
        }

        Err(self.unsatisfiable())
    }

    /// Lazy, strictly increasing stream of occurrences after `after`.
    pub fn upcoming(&self, after: DateTime<Utc>) -> Upcoming<'_> {
        Upcoming {
            expression: self,
            cursor: after,
            stopped: false,
        }
    }

    /// The next `count` occurrences after `after`.
    pub fn next_occurrences(
        &self,
        after: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.upcoming(after).take(count).collect()
    }

    fn unsatisfiable(&self) -> ScheduleError {
        ScheduleError::Unsatisfiable {
            expression: self.text().to_string(),
        }
    }
}

/// Iterator over occurrences, feeding each result back as the new
/// reference instant. Stops permanently after the first failure.
pub struct Upcoming<'a> {
    expression: &'a ScheduleExpression,
    cursor: DateTime<Utc>,
    stopped: bool,
}

impl Iterator for Upcoming<'_> {
    type Item = Result<DateTime<Utc>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        match self.expression.next_after(self.cursor) {
            Ok(t) => {
                self.cursor = t;
                Some(Ok(t))
            }
            Err(err) => {
                self.stopped = true;
                Some(Err(err))
            }
        }
    }
}

/// Day constraints combine with the conventional rule: when both
/// day-of-month and day-of-week are restricted, a date matching either
/// qualifies; otherwise only the restricted one must match.
fn day_matches(expression: &ScheduleExpression, t: DateTime<Utc>) -> bool {
    let dom = expression.day_of_month();
    let dow = expression.day_of_week();
    let dom_hit = dom.matches(t.day());
    let dow_hit = dow.matches(t.weekday().num_days_from_sunday());

    match (dom.is_unrestricted(), dow.is_unrestricted()) {
        (false, false) => dom_hit || dow_hit,
        (false, true) => dom_hit,
        (true, false) => dow_hit,
        (true, true) => true,
    }
}

fn next_minute(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs = t.timestamp();
    DateTime::from_timestamp(secs - secs.rem_euclid(60) + 60, 0)
}

fn start_of_next_hour(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs = t.timestamp();
    DateTime::from_timestamp(secs - secs.rem_euclid(3600) + 3600, 0)
}

fn start_of_next_day(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let next = t.date_naive().succ_opt()?;
    Some(Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN)))
}

fn start_of_next_month(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let (year, month) = if t.month() == 12 {
        (t.year() + 1, 1)
    } else {
        (t.year(), t.month() + 1)
    };
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}
