pub mod availability;
pub mod constants;
pub mod tracing;
