use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::Arc;
use team_availability::{
    app_state::AppState,
    domain::{
        parse_date, LeaveDateRange, LeaveRequest, LeaveRequestId, LeaveStatus,
        LeaveType, LeaveTypeId, LeaveTypeName, Member, MemberId,
    },
    services::{data_stores::InMemoryLeaveDataSource, OnLeave},
    utils::tracing::init_tracing,
    LeaveAvailabilityAggregator,
};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub state: AppState,
    pub leave_data_source: Arc<RwLock<InMemoryLeaveDataSource>>,
}

impl TestApp {
    pub async fn new() -> Self {
        // Only the first fixture in the process installs the subscriber.
        let _ = init_tracing();

        let mut source = InMemoryLeaveDataSource::default();
        source.add_team_member(member_json(1, "Alice", "Smith"));
        source.add_team_member(member_json(2, "Bob", "Jones"));

        let leave_data_source = Arc::new(RwLock::new(source));
        let state = AppState::new(leave_data_source.clone());

        Self {
            state,
            leave_data_source,
        }
    }

    pub async fn add_team_member(&self, member: Value) {
        self.leave_data_source.write().await.add_team_member(member);
    }

    pub async fn add_leave_request(&self, request: Value) {
        self.leave_data_source.write().await.add_leave_request(request);
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub fn ymd(value: &str) -> NaiveDate {
    parse_date(value).expect("Failed to parse test date")
}

pub fn member(id: u64, first_name: &str, last_name: &str) -> Member {
    Member::parse(id as i64, first_name, last_name)
        .expect("Failed to parse test member")
}

pub fn alice_and_bob() -> Vec<Member> {
    vec![member(1, "Alice", "Smith"), member(2, "Bob", "Jones")]
}

pub fn leave_type(name: &str) -> LeaveType {
    let id = match name {
        "Annual" => 1,
        "Sick" => 2,
        "Personal" => 3,
        _ => 99,
    };
    LeaveType::new(
        LeaveTypeId::new(id),
        LeaveTypeName::parse(name).expect("Failed to parse leave type"),
        None,
    )
}

pub fn leave(
    id: u64,
    member_id: u64,
    leave_type_name: &str,
    start: &str,
    end: &str,
    status: LeaveStatus,
) -> LeaveRequest {
    LeaveRequest::new(
        LeaveRequestId::new(id),
        MemberId::new(member_id),
        leave_type(leave_type_name),
        LeaveDateRange::parse(start, end).expect("Failed to parse range"),
        status,
    )
}

pub fn approved(
    id: u64,
    member_id: u64,
    leave_type_name: &str,
    start: &str,
    end: &str,
) -> LeaveRequest {
    leave(id, member_id, leave_type_name, start, end, LeaveStatus::Approved)
}

pub fn build(
    members: Vec<Member>,
    requests: Vec<LeaveRequest>,
) -> LeaveAvailabilityAggregator {
    LeaveAvailabilityAggregator::build(members, requests)
        .expect("Failed to build aggregator")
}

pub fn member_json(id: i64, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "employee_id": format!("E{id:03}"),
        "first_name": first_name,
        "last_name": last_name,
        "position": "Engineer",
        "email": format!("{}@example.com", first_name.to_lowercase())
    })
}

pub fn leave_request_json(
    id: u64,
    member_id: i64,
    leave_type_name: &str,
    start: &str,
    end: &str,
    status: &str,
) -> Value {
    let leave_type = leave_type(leave_type_name);
    json!({
        "id": id,
        "request_id": format!("LR-{id:04}"),
        "user": { "id": member_id, "first_name": "Someone", "last_name": "Else" },
        "leave_type": { "id": leave_type.id.as_ref(), "name": leave_type_name },
        "start_date": start,
        "end_date": end,
        "days_count": 1,
        "reason": "",
        "status": status,
        "proxy_person": { "id": 99, "first_name": "Proxy", "last_name": "Person" },
        "approver": null,
        "approved_at": null,
        "created_at": "2024-03-01T08:00:00Z",
        "rejection_reason": null
    })
}

pub fn names(entries: &[OnLeave<'_>]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| {
            (
                entry.member.first_name.as_ref().to_owned(),
                entry.leave_type.name.as_ref().to_owned(),
            )
        })
        .collect()
}
