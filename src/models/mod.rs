pub mod project;
pub mod task;

pub use project::*;
pub use task::*;

use time::{macros::format_description, Date, PrimitiveDateTime};

/// Current UTC time, truncated to whole seconds
pub fn now_timestamp() -> PrimitiveDateTime {
    let now = time::OffsetDateTime::now_utc();
    let now = now.replace_nanosecond(0).unwrap_or(now);
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
}
