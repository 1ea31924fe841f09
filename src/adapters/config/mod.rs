pub mod app_config;
pub mod exchanges_config;
pub mod sheets_config;
pub mod telegram_config;
