use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::{
    parse_leave_requests, parse_roster, BuildDiagnostics, CalendarWindow,
    ConstructionError, LeaveRequest, LeaveRequestId, LeaveRequestsPayload,
    LeaveStatus, LeaveType, LeaveTypeName, Member, MemberId,
    TeamMembersPayload, ValidationError,
};
use crate::utils::constants::{UPCOMING_MAX_DAYS, UPCOMING_MAX_RESULTS};

/// Day- and member-indexed view over one window of leave requests.
///
/// Built once per window from immutable snapshots and never mutated
/// afterwards, so every query takes `&self` and may be shared freely.
#[derive(Debug, Clone, Default)]
pub struct LeaveAvailabilityAggregator {
    roster: BTreeMap<MemberId, Member>,
    requests: Vec<LeaveRequest>,
    // Indices into `requests`: approved, roster members only, sorted by
    // member id then input order.
    approved: Vec<usize>,
    diagnostics: BuildDiagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnLeave<'a> {
    pub member: &'a Member,
    pub leave_type: &'a LeaveType,
    pub request_id: LeaveRequestId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCheck {
    pub on_leave: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<LeaveTypeName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_end_date: Option<NaiveDate>,
}

impl LeaveCheck {
    pub fn available() -> Self {
        Self {
            on_leave: false,
            leave_type: None,
            leave_end_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingLeave<'a> {
    pub member: &'a Member,
    pub leave_type: &'a LeaveType,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub present: usize,
    pub on_leave: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberFilter {
    #[default]
    All,
    Only(MemberId),
}

impl MemberFilter {
    pub fn matches(&self, member_id: MemberId) -> bool {
        match self {
            MemberFilter::All => true,
            MemberFilter::Only(id) => *id == member_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Availability {
    Available,
    #[serde(rename = "On Leave", rename_all = "camelCase")]
    OnLeave {
        leave_type: LeaveTypeName,
        leave_until: NaiveDate,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry<'a> {
    #[serde(flatten)]
    pub member: &'a Member,
    #[serde(flatten)]
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMember {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub leave_type: String,
}

impl CalendarMember {
    fn new(member: &Member, leave_type: &LeaveType) -> Self {
        Self {
            id: *member.id.as_ref(),
            first_name: member.first_name.as_ref().to_owned(),
            last_name: member.last_name.as_ref().to_owned(),
            leave_type: leave_type.name.as_ref().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub members_on_leave: Vec<CalendarMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Only days with at least one member on leave, ascending.
    pub days: Vec<CalendarDay>,
}

impl MonthCalendar {
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

impl LeaveAvailabilityAggregator {
    /// An aggregator with no members and no requests, for callers that
    /// could not build one and still need to render something.
    pub fn empty() -> Self {
        Self::default()
    }

    #[tracing::instrument(name = "Building leave availability", skip_all)]
    pub fn build(
        members: Vec<Member>,
        requests: Vec<LeaveRequest>,
    ) -> Result<Self, ConstructionError> {
        let mut roster = BTreeMap::new();
        for member in members {
            let id = member.id;
            if roster.insert(id, member).is_some() {
                return Err(ConstructionError::DuplicateMember(id));
            }
        }

        let mut diagnostics = BuildDiagnostics::default();
        let mut approved = Vec::new();
        for (index, request) in requests.iter().enumerate() {
            if !roster.contains_key(&request.member_id) {
                diagnostics.orphaned_requests.push(request.id);
            } else if request.status.is_approved() {
                approved.push(index);
            }
        }
        approved.sort_by_key(|&index| (requests[index].member_id, index));

        tracing::debug!(
            "roster: {}, requests: {}, approved: {}, orphaned: {}",
            roster.len(),
            requests.len(),
            approved.len(),
            diagnostics.orphaned_requests.len()
        );

        Ok(Self {
            roster,
            requests,
            approved,
            diagnostics,
        })
    }

    /// Builds from raw API bodies. Malformed records are skipped and kept in
    /// [`Self::diagnostics`]; only a duplicate roster ID fails the build.
    #[tracing::instrument(name = "Building leave availability from payloads", skip_all)]
    pub fn from_payloads(
        team: &TeamMembersPayload,
        pages: &[LeaveRequestsPayload],
    ) -> Result<Self, ConstructionError> {
        let roster = parse_roster(team);
        let requests = parse_leave_requests(pages);

        for skipped in roster.skipped.iter().chain(requests.skipped.iter()) {
            tracing::warn!(
                "skipping {:?} record {}: {}",
                skipped.kind,
                skipped.index,
                skipped.reason
            );
        }

        let mut aggregator = Self::build(roster.records, requests.records)?;
        aggregator.diagnostics.skipped =
            roster.skipped.into_iter().chain(requests.skipped).collect();
        Ok(aggregator)
    }

    pub fn diagnostics(&self) -> &BuildDiagnostics {
        &self.diagnostics
    }

    pub fn total_members(&self) -> usize {
        self.roster.len()
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.roster.get(&member_id)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.roster.values()
    }

    /// Any parsed request, whatever its status.
    pub fn request(&self, id: LeaveRequestId) -> Option<&LeaveRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    pub fn requests_with_status(
        &self,
        status: LeaveStatus,
    ) -> impl Iterator<Item = &LeaveRequest> {
        self.requests
            .iter()
            .filter(move |request| request.status == status)
    }

    fn covering(
        &self,
        date: NaiveDate,
    ) -> impl Iterator<Item = &LeaveRequest> + '_ {
        self.approved
            .iter()
            .map(|&index| &self.requests[index])
            .filter(move |request| request.period.contains(date))
    }

    pub fn members_on_leave(&self, date: NaiveDate) -> Vec<OnLeave<'_>> {
        self.members_on_leave_matching(date, &MemberFilter::All)
    }

    pub fn members_on_leave_matching(
        &self,
        date: NaiveDate,
        filter: &MemberFilter,
    ) -> Vec<OnLeave<'_>> {
        self.covering(date)
            .filter(|request| filter.matches(request.member_id))
            .filter_map(|request| {
                self.roster.get(&request.member_id).map(|member| OnLeave {
                    member,
                    leave_type: &request.leave_type,
                    request_id: request.id,
                })
            })
            .collect()
    }

    /// People off per leave type on `date`, keyed by type name in order of
    /// first appearance among [`Self::members_on_leave_matching`].
    pub fn leave_type_counts(
        &self,
        date: NaiveDate,
        filter: &MemberFilter,
    ) -> Vec<(&LeaveType, usize)> {
        let mut counts: Vec<(&LeaveType, usize)> = Vec::new();
        for on_leave in self.members_on_leave_matching(date, filter) {
            let name = &on_leave.leave_type.name;
            match counts
                .iter_mut()
                .find(|(leave_type, _)| &leave_type.name == name)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((on_leave.leave_type, 1)),
            }
        }
        counts
    }

    pub fn has_leave(&self, date: NaiveDate, filter: &MemberFilter) -> bool {
        self.covering(date)
            .any(|request| filter.matches(request.member_id))
    }

    // Latest end date wins; ties keep the earliest request.
    fn covering_request(
        &self,
        member_id: MemberId,
        date: NaiveDate,
    ) -> Option<&LeaveRequest> {
        self.covering(date)
            .filter(|request| request.member_id == member_id)
            .fold(None::<&LeaveRequest>, |best, request| match best {
                Some(best) if best.period.end() >= request.period.end() => {
                    Some(best)
                }
                _ => Some(request),
            })
    }

    pub fn is_on_leave(&self, member_id: MemberId, date: NaiveDate) -> LeaveCheck {
        match self.covering_request(member_id, date) {
            Some(request) => LeaveCheck {
                on_leave: true,
                leave_type: Some(request.leave_type.name.clone()),
                leave_end_date: Some(request.period.end()),
            },
            None => LeaveCheck::available(),
        }
    }

    /// Leaves on the days strictly after `reference_date`, at most
    /// `max_days` ahead, cut off after `max_results` entries.
    pub fn upcoming_leaves(
        &self,
        reference_date: NaiveDate,
        max_days: u32,
        max_results: usize,
    ) -> Vec<UpcomingLeave<'_>> {
        let mut upcoming = Vec::new();
        let last_covered = self
            .approved
            .iter()
            .map(|&index| self.requests[index].period.end())
            .max();
        let Some(last_covered) = last_covered else {
            return upcoming;
        };
        if max_results == 0 {
            return upcoming;
        }

        for offset in 1..=u64::from(max_days) {
            let Some(date) = reference_date.checked_add_days(Days::new(offset))
            else {
                break;
            };
            if date > last_covered {
                break;
            }
            for entry in self.members_on_leave(date) {
                upcoming.push(UpcomingLeave {
                    member: entry.member,
                    leave_type: entry.leave_type,
                    date,
                });
                if upcoming.len() == max_results {
                    return upcoming;
                }
            }
        }
        upcoming
    }

    /// [`Self::upcoming_leaves`] with the configured look-ahead.
    pub fn upcoming_leaves_default(
        &self,
        reference_date: NaiveDate,
    ) -> Vec<UpcomingLeave<'_>> {
        self.upcoming_leaves(
            reference_date,
            *UPCOMING_MAX_DAYS,
            *UPCOMING_MAX_RESULTS,
        )
    }

    pub fn attendance_stats(&self, date: NaiveDate) -> AttendanceStats {
        let total = self.roster.len();
        let on_leave = self
            .members_on_leave(date)
            .iter()
            .map(|entry| entry.member.id)
            .collect::<BTreeSet<_>>()
            .len();
        let present = total.saturating_sub(on_leave);
        let rate = if total == 0 {
            0.0
        } else {
            present as f64 / total as f64
        };

        AttendanceStats {
            present,
            on_leave,
            rate,
        }
    }

    /// Every roster member, ascending by ID, with their status on `date`.
    pub fn roster_status(&self, date: NaiveDate) -> Vec<RosterEntry<'_>> {
        self.roster
            .values()
            .map(|member| RosterEntry {
                member,
                availability: match self.covering_request(member.id, date) {
                    Some(request) => Availability::OnLeave {
                        leave_type: request.leave_type.name.clone(),
                        leave_until: request.period.end(),
                    },
                    None => Availability::Available,
                },
            })
            .collect()
    }

    pub fn month_calendar(
        &self,
        year: i32,
        month: u32,
        filter: &MemberFilter,
    ) -> Result<MonthCalendar, ValidationError> {
        let window = CalendarWindow::month(year, month)?;
        let mut days: BTreeMap<NaiveDate, Vec<CalendarMember>> = BTreeMap::new();

        for request in self.approved.iter().map(|&index| &self.requests[index]) {
            if !filter.matches(request.member_id) {
                continue;
            }
            let (Some(member), Some(span)) = (
                self.roster.get(&request.member_id),
                request
                    .period
                    .intersect(window.first_day(), window.last_day()),
            ) else {
                continue;
            };
            for day in span.days() {
                days.entry(day)
                    .or_default()
                    .push(CalendarMember::new(member, &request.leave_type));
            }
        }

        Ok(MonthCalendar {
            year,
            month,
            days: days
                .into_iter()
                .map(|(date, members_on_leave)| CalendarDay {
                    date,
                    members_on_leave,
                })
                .collect(),
        })
    }
}
