pub mod date_time;
pub mod dpt_id;

pub use date_time::{weekday_name, DateTime};
pub use dpt_id::DptId;
