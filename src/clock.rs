use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

/// Source of "now" for the form: the timestamp stamped on each attempt and the calendar date birth
/// dates are checked against.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date the user sees, used for age checks.
    fn today(&self) -> NaiveDate;

    /// ISO-8601 in UTC with millisecond precision, e.g. `2024-06-15T10:00:00.000Z`.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
