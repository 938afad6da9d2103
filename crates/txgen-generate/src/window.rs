use chrono::{DateTime, NaiveTime, Utc};
use rand::Rng;

/// Interval that generated timestamps are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// From midnight (UTC) of `now`'s calendar day up to `now`.
    pub fn today(now: DateTime<Utc>) -> Self {
        let start = now.date_naive().and_time(NaiveTime::default()).and_utc();
        Self { start, end: now }
    }

    /// Draw a uniformly distributed instant in `[start, end)`.
    ///
    /// An empty or inverted window always yields `start`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let span = (self.end - self.start).num_nanoseconds().unwrap_or(i64::MAX);
        if span <= 0 {
            return self.start;
        }
        self.start + chrono::Duration::nanoseconds(rng.random_range(0..span))
    }
}
