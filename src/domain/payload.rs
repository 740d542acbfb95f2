use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    ColorCode, LeaveDataSourceError, LeaveDateRange, LeaveRequest, LeaveRequestId, LeaveStatus,
    LeaveType, LeaveTypeId, LeaveTypeName, MalformedInputError, Member,
    MemberId, MemberName, RecordKind, SkippedRecord,
};

/// Body of the team roster endpoint. Records stay untyped until parsed so one
/// bad record cannot sink the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMembersPayload {
    pub team_members: Vec<Value>,
}

/// One page of the team leave-request endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestsPayload {
    pub leave_requests: Vec<Value>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

impl TeamMembersPayload {
    pub fn from_json(body: &str) -> Result<Self, LeaveDataSourceError> {
        serde_json::from_str(body).map_err(LeaveDataSourceError::InvalidPayload)
    }
}

impl LeaveRequestsPayload {
    pub fn from_json(body: &str) -> Result<Self, LeaveDataSourceError> {
        serde_json::from_str(body).map_err(LeaveDataSourceError::InvalidPayload)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Deserialize)]
struct RawMember {
    id: i64,
    first_name: String,
    last_name: String,
}

#[derive(Deserialize)]
struct RawMemberRef {
    id: i64,
}

#[derive(Deserialize)]
struct RawLeaveType {
    id: u64,
    name: String,
    #[serde(default)]
    color_code: Option<String>,
}

#[derive(Deserialize)]
struct RawLeaveRequest {
    id: u64,
    user: RawMemberRef,
    leave_type: RawLeaveType,
    start_date: String,
    end_date: String,
    status: String,
    #[serde(default)]
    days_count: Option<f64>,
}

fn invalid_shape(e: serde_json::Error) -> MalformedInputError {
    MalformedInputError::InvalidShape(e.to_string())
}

pub fn parse_member(value: &Value) -> Result<Member, MalformedInputError> {
    let raw = RawMember::deserialize(value).map_err(invalid_shape)?;
    Ok(Member::new(
        MemberId::parse(raw.id)?,
        MemberName::parse(raw.first_name)?,
        MemberName::parse(raw.last_name)?,
    ))
}

pub fn parse_leave_request(
    value: &Value,
) -> Result<LeaveRequest, MalformedInputError> {
    let raw = RawLeaveRequest::deserialize(value).map_err(invalid_shape)?;

    let leave_type = LeaveType::new(
        LeaveTypeId::new(raw.leave_type.id),
        LeaveTypeName::parse(&raw.leave_type.name)?,
        raw.leave_type
            .color_code
            .filter(|code| !code.trim().is_empty())
            .map(ColorCode::new),
    );
    let period = LeaveDateRange::parse(&raw.start_date, &raw.end_date)?;
    let status = raw.status.parse::<LeaveStatus>()?;

    let mut request = LeaveRequest::new(
        LeaveRequestId::new(raw.id),
        MemberId::parse(raw.user.id)?,
        leave_type,
        period,
        status,
    );
    request.days_count = raw.days_count;
    Ok(request)
}

/// Records that survived the parse boundary plus what was dropped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

fn parse_all<'a, T>(
    values: impl Iterator<Item = &'a Value>,
    kind: RecordKind,
    parse: impl Fn(&Value) -> Result<T, MalformedInputError>,
) -> ParsedRecords<T> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (index, value) in values.enumerate() {
        match parse(value) {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRecord {
                kind,
                index,
                reason,
            }),
        }
    }
    ParsedRecords { records, skipped }
}

pub fn parse_roster(payload: &TeamMembersPayload) -> ParsedRecords<Member> {
    parse_all(payload.team_members.iter(), RecordKind::Member, parse_member)
}

/// Parses every page in order; skipped indices count across pages.
pub fn parse_leave_requests(
    pages: &[LeaveRequestsPayload],
) -> ParsedRecords<LeaveRequest> {
    parse_all(
        pages.iter().flat_map(|page| page.leave_requests.iter()),
        RecordKind::LeaveRequest,
        parse_leave_request,
    )
}
