pub mod auth;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod spreadsheet_report_sink;
pub mod spreadsheet_write;
pub mod value_range_factory;
