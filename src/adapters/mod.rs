pub mod config;
pub mod exchange;
pub mod http;
pub mod notifier;
pub mod report;
pub mod sheets;
