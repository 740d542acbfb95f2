mod calendar_window;
mod data_stores;
mod error;
mod leave_request;
mod leave_status;
mod leave_type;
mod member;
mod member_id;
mod member_name;
mod payload;

pub use calendar_window::*;
pub use data_stores::*;
pub use error::*;
pub use leave_request::*;
pub use leave_status::*;
pub use leave_type::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use payload::*;
