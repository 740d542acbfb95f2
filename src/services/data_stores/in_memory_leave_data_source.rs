use color_eyre::eyre::eyre;
use serde_json::Value;

use crate::domain::{
    parse_date, LeaveDataSource, LeaveDataSourceError, LeaveRequestQuery,
    LeaveRequestsPayload, PaginationMeta, TeamMembersPayload,
};

/// Serves raw API records from memory, filtering and paginating them the way
/// the team leave-request endpoint does.
#[derive(Default)]
pub struct InMemoryLeaveDataSource {
    team_members: Vec<Value>,
    leave_requests: Vec<Value>,
    unavailable: bool,
}

impl InMemoryLeaveDataSource {
    pub fn add_team_member(&mut self, member: Value) {
        self.team_members.push(member);
    }

    pub fn add_leave_request(&mut self, request: Value) {
        self.leave_requests.push(request);
    }

    /// Makes every call fail, to exercise callers' error paths.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check_available(&self) -> Result<(), LeaveDataSourceError> {
        if self.unavailable {
            return Err(LeaveDataSourceError::UnexpectedError(eyre!(
                "leave data source is unavailable"
            )));
        }
        Ok(())
    }
}

fn matches_query(record: &Value, query: &LeaveRequestQuery) -> bool {
    if let Some(status) = query.status {
        let record_status = record["status"].as_str().map(str::to_lowercase);
        if record_status.as_deref() != Some(status.to_string().as_str()) {
            return false;
        }
    }

    // Records with unreadable dates pass through; the parse boundary reports
    // them.
    let dates = record["start_date"]
        .as_str()
        .zip(record["end_date"].as_str())
        .and_then(|(start, end)| parse_date(start).ok().zip(parse_date(end).ok()));
    match (dates, query.start_date, query.end_date) {
        (Some((start, end)), Some(window_start), Some(window_end)) => {
            start <= window_end && window_start <= end
        }
        (Some((_, end)), Some(window_start), None) => window_start <= end,
        (Some((start, _)), None, Some(window_end)) => start <= window_end,
        _ => true,
    }
}

#[async_trait::async_trait]
impl LeaveDataSource for InMemoryLeaveDataSource {
    async fn get_team_members(
        &self,
    ) -> Result<TeamMembersPayload, LeaveDataSourceError> {
        self.check_available()?;
        Ok(TeamMembersPayload {
            team_members: self.team_members.clone(),
        })
    }

    async fn get_team_leave_requests(
        &self,
        query: &LeaveRequestQuery,
    ) -> Result<LeaveRequestsPayload, LeaveDataSourceError> {
        self.check_available()?;

        let matching: Vec<&Value> = self
            .leave_requests
            .iter()
            .filter(|record| matches_query(record, query))
            .collect();

        let per_page = query.per_page.max(1);
        let page = query.page.max(1);
        let total = matching.len() as u64;
        let total_pages = total.div_ceil(per_page as u64) as u32;

        let leave_requests = matching
            .into_iter()
            .skip((page as usize - 1) * per_page as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(LeaveRequestsPayload {
            leave_requests,
            pagination: Some(PaginationMeta {
                total,
                page,
                per_page,
                total_pages,
            }),
        })
    }
}
