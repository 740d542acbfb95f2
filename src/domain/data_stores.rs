use chrono::NaiveDate;

use super::{
    LeaveDataSourceError, LeaveRequestsPayload, LeaveStatus, TeamMembersPayload,
};

/// Filters accepted by the team leave-request listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveRequestQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<LeaveStatus>,
    pub page: u32,
    pub per_page: u32,
}

impl LeaveRequestQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            start_date: None,
            end_date: None,
            status: None,
            page: 1,
            per_page,
        }
    }

    pub fn between(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

#[async_trait::async_trait]
pub trait LeaveDataSource {
    async fn get_team_members(
        &self,
    ) -> Result<TeamMembersPayload, LeaveDataSourceError>;
    async fn get_team_leave_requests(
        &self,
        query: &LeaveRequestQuery,
    ) -> Result<LeaveRequestsPayload, LeaveDataSourceError>;
}
