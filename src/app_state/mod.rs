use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::LeaveDataSource;

pub type LeaveDataSourceType = Arc<RwLock<dyn LeaveDataSource + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub leave_data_source: LeaveDataSourceType,
}

impl AppState {
    pub fn new(leave_data_source: LeaveDataSourceType) -> Self {
        Self { leave_data_source }
    }
}
