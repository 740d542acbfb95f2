use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LeaveStatus, LeaveType, MalformedInputError, MemberId};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LeaveRequestId(u64);

impl LeaveRequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl AsRef<u64> for LeaveRequestId {
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

/// Parses a `YYYY-MM-DD` calendar date. Unpadded fields and signed years are
/// rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate, MalformedInputError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == trimmed)
        .ok_or_else(|| MalformedInputError::InvalidDate(value.to_owned()))
}

/// Inclusive range of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl LeaveDateRange {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, MalformedInputError> {
        if start > end {
            return Err(MalformedInputError::InvertedRange {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, MalformedInputError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// The clipped sub-range that lies within `start..=end`, if any.
    pub fn intersect(&self, start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if !self.overlaps(start, end) {
            return None;
        }
        Some(Self {
            start: self.start.max(start),
            end: self.end.min(end),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub member_id: MemberId,
    pub leave_type: LeaveType,
    pub period: LeaveDateRange,
    pub status: LeaveStatus,
    /// Working days as reported upstream; never recomputed here.
    pub days_count: Option<f64>,
}

impl LeaveRequest {
    pub fn new(
        id: LeaveRequestId,
        member_id: MemberId,
        leave_type: LeaveType,
        period: LeaveDateRange,
        status: LeaveStatus,
    ) -> Self {
        Self {
            id,
            member_id,
            leave_type,
            period,
            status,
            days_count: None,
        }
    }

    pub fn with_days_count(mut self, days_count: f64) -> Self {
        self.days_count = Some(days_count);
        self
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.status.is_approved() && self.period.contains(date)
    }
}
