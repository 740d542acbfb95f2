mod in_memory_leave_data_source;

pub use in_memory_leave_data_source::*;
