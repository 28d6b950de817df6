pub mod table;
pub mod time;

pub use time::{format_db_datetime, parse_db_datetime};
