use config::Config;
use error_stack::{report, ResultExt};
use thiserror::Error;

use super::exchanges_config::ExchangesConfig;
use super::sheets_config::SpreadsheetConfig;
use super::telegram_config::TelegramConfig;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub sheets: Option<SpreadsheetConfig>,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub exchanges: ExchangesConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Error reading configuration sources")]
    ReadError,
    #[error("Invalid configuration field '{0}'")]
    InvalidField(String),
    #[error("Missing spreadsheet configuration (SHEETS__CREDENTIALS_BASE64 and SHEETS__SPREADSHEET_ID)")]
    MissingSheets,
}

impl AppConfig {
    /// Reads the optional config file named by `CONFIG_PATH` (default `Config`)
    /// and overlays environment variables, using `__` for nesting
    /// (`SHEETS__SPREADSHEET_ID` sets `sheets.spreadsheet_id`).
    pub fn load() -> error_stack::Result<Self, AppConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let config = Config::builder()
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .change_context(AppConfigError::ReadError)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> error_stack::Result<Self, AppConfigError> {
        serde_path_to_error::deserialize(config).map_err(|err| {
            let path = err.path().to_string();
            report!(AppConfigError::InvalidField(path)).attach_printable(err.into_inner().to_string())
        })
    }

    /// The spreadsheet settings are only mandatory for the server.
    pub fn sheets(&self) -> error_stack::Result<&SpreadsheetConfig, AppConfigError> {
        self.sheets
            .as_ref()
            .ok_or_else(|| report!(AppConfigError::MissingSheets))
    }
}
