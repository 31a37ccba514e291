use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parses an ISO `YYYY-MM-DD` date and checks it against `today`: the date must not be in the
    /// future and the subject must have turned `minimum_age` on or before `today`.
    pub fn parse(s: &str, today: NaiveDate, minimum_age: u32) -> Result<BirthDate, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Birth date is required.".into());
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| String::from("Enter a valid date."))?;
        if date > today {
            return Err("Birth date cannot be in the future.".into());
        }
        if date > minimum_age_cutoff(today, minimum_age) {
            return Err(format!("You must be at least {minimum_age} years old."));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Same month and day, `years` earlier. 29 February clamps to 28 February when the target year has
/// no leap day.
fn minimum_age_cutoff(today: NaiveDate, years: u32) -> NaiveDate {
    let cutoff = today.year() - years as i32;
    today.with_year(cutoff).unwrap_or_else(|| {
        today
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN)
    })
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
