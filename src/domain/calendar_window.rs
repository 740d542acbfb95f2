use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The span of days one aggregation pass is built for, usually a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl CalendarWindow {
    pub fn new(
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if first_day > last_day {
            return Err(ValidationError::new(String::from(
                "Window must start on or before its last day",
            )));
        }
        Ok(Self {
            first_day,
            last_day,
        })
    }

    pub fn month(year: i32, month: u32) -> Result<Self, ValidationError> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(
            || ValidationError::new(format!("Invalid month: {year}-{month}")),
        )?;
        let last_day = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
        }
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| {
            ValidationError::new(format!("Invalid month: {year}-{month}"))
        })?;

        Ok(Self {
            first_day,
            last_day,
        })
    }

    pub fn containing(date: NaiveDate) -> Self {
        // Every valid date has a valid enclosing month.
        Self::month(date.year(), date.month()).unwrap_or(Self {
            first_day: date,
            last_day: date,
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last_day = self.last_day;
        self.first_day
            .iter_days()
            .take_while(move |day| *day <= last_day)
    }
}
