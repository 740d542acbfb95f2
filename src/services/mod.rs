pub mod data_stores;
pub mod leave_availability;

pub use leave_availability::*;
