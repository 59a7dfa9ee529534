//! Upcoming birthday report.
//!
//! A contact qualifies when this year's occurrence of their birthday lies
//! in `[today, today + lookahead]`, both ends inclusive. Occurrences on a
//! weekend are congratulated on the following Monday.

use super::AddressBook;
use crate::domain::{Name, DATE_FORMAT};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Default lookahead of the birthday report, in days.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// One row of the birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> impl fmt::Display + '_ {
        self.congratulation_date.format(DATE_FORMAT)
    }
}

impl AddressBook {
    /// Birthdays in the next [`DEFAULT_LOOKAHEAD_DAYS`] days.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_LOOKAHEAD_DAYS)
    }

    /// Birthdays whose current-year occurrence falls within `days` of
    /// `today`, in insertion order.
    ///
    /// The projection always uses `today`'s year, so early-January
    /// birthdays are not reported from late December.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.records()
            .filter_map(|record| {
                let projected = record.birthday()?.in_year(today.year())?;
                if projected < today || projected > end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    congratulation_date: shift_off_weekend(projected)?,
                })
            })
            .collect()
    }
}

/// Move Saturday and Sunday to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift))
}
