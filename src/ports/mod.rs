pub mod notifier;
pub mod report_sink;
pub mod ticker_source;
