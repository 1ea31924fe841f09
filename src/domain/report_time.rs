use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Asia/Kolkata has no daylight saving, so a fixed +05:30 offset is exact.
const REPORT_UTC_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

pub const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const WORKSHEET_DATE_FORMAT: &str = "%Y-%m-%d";
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn report_offset() -> FixedOffset {
    FixedOffset::east_opt(REPORT_UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

pub fn report_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&report_offset())
}

/// Timestamp stamped on every asset row.
pub fn row_timestamp() -> String {
    report_now().format(ROW_TIMESTAMP_FORMAT).to_string()
}

pub fn worksheet_date() -> String {
    report_now().format(WORKSHEET_DATE_FORMAT).to_string()
}

/// CSV download names use the server's local clock.
pub fn filename_timestamp() -> String {
    Local::now().format(FILENAME_TIMESTAMP_FORMAT).to_string()
}
