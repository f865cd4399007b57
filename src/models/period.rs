//! Calendar week representation
//!
//! Pacing works in Sunday-to-Saturday weeks. A `Week` is identified by its
//! Sunday.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Sunday-to-Saturday calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week {
    sunday: NaiveDate,
}

impl Week {
    /// The week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_sunday();
        Self {
            sunday: date - Duration::days(i64::from(offset)),
        }
    }

    /// First day of the week (Sunday)
    pub fn start_date(&self) -> NaiveDate {
        self.sunday
    }

    /// Last day of the week (Saturday, inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.sunday + Duration::days(6)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub fn next(&self) -> Self {
        Self {
            sunday: self.sunday + Duration::days(7),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            sunday: self.sunday - Duration::days(7),
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start_date().format("%b %-d"),
            self.end_date().format("%b %-d, %Y")
        )
    }
}
