pub mod app_state;
pub mod domain;
pub mod services;
pub mod utils;

pub use app_state::AppState;
pub use services::{LeaveAvailabilityAggregator, MemberFilter};
pub use utils::availability::{
    load_availability, load_availability_or_empty, load_month,
};
