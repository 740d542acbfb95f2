use tracing::Level;

use crate::{
    app_state::AppState,
    domain::{
        AvailabilityError, CalendarWindow, LeaveRequestQuery, LeaveStatus,
    },
    services::LeaveAvailabilityAggregator,
    utils::{constants::LEAVE_PAGE_SIZE, tracing::log_error_chain},
};

/// Fetches the roster and every page of approved leave overlapping `window`,
/// then builds the aggregator for it.
#[tracing::instrument(name = "Load leave availability", skip_all)]
pub async fn load_availability(
    state: &AppState,
    window: CalendarWindow,
) -> Result<LeaveAvailabilityAggregator, AvailabilityError> {
    let source = state.leave_data_source.read().await;

    let team = source.get_team_members().await?;
    tracing::debug!("team members: {}", team.team_members.len());

    let query = LeaveRequestQuery::new(*LEAVE_PAGE_SIZE)
        .between(window.first_day(), window.last_day())
        .with_status(LeaveStatus::Approved);

    let mut pages = Vec::new();
    let mut page = 1;
    let mut last_page = None;
    loop {
        let payload = source.get_team_leave_requests(&query.page(page)).await?;
        let Some(pagination) = payload.pagination else {
            pages.push(payload);
            break;
        };
        if pagination.page != page {
            tracing::warn!(
                "requested leave page {} but source returned page {}",
                page,
                pagination.page
            );
            break;
        }
        // The first response fixes how many pages are fetched.
        let total_pages = *last_page.get_or_insert(pagination.total_pages);
        let is_empty = payload.leave_requests.is_empty();
        pages.push(payload);
        if is_empty || page >= total_pages {
            break;
        }
        page += 1;
    }
    tracing::debug!("leave request pages: {}", pages.len());

    LeaveAvailabilityAggregator::from_payloads(&team, &pages).map_err(|e| {
        log_error_chain(&e, Level::WARN);
        AvailabilityError::from(e)
    })
}

/// Like [`load_availability`], but a roster that cannot be built yields an
/// empty aggregator instead of an error. Source failures still propagate.
pub async fn load_availability_or_empty(
    state: &AppState,
    window: CalendarWindow,
) -> Result<LeaveAvailabilityAggregator, AvailabilityError> {
    match load_availability(state, window).await {
        Err(AvailabilityError::ConstructionError(_)) => {
            Ok(LeaveAvailabilityAggregator::empty())
        }
        result => result,
    }
}

/// Loads the month that contains `year`/`month`.
pub async fn load_month(
    state: &AppState,
    year: i32,
    month: u32,
) -> Result<LeaveAvailabilityAggregator, AvailabilityError> {
    let window = CalendarWindow::month(year, month)?;
    load_availability(state, window).await
}
