pub mod exchange;
pub mod report_time;
pub mod ticker;
pub mod volume;
pub mod volume_row;
