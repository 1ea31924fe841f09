use coin_volume_report::{
    adapters::{
        config::app_config::AppConfig,
        exchange::{coindcx::CoinDcxTickerSource, coinswitch::CoinSwitchTickerSource},
        notifier::telegram::TelegramNotifier,
        sheets::{
            spreadsheet_manager::SpreadsheetManager, spreadsheet_report_sink::SpreadsheetReportSink,
        },
    },
    application::volume_report::VolumeReportService,
    domain::exchange::Exchange,
    ports::ticker_source::TickerSource,
};
use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceFactoryError {
    #[error("Spreadsheet archiving is not configured")]
    MissingSpreadsheetConfig,
    #[error("Could not set up the spreadsheet client")]
    SpreadsheetSetupFailed,
}

pub struct ApplicationServiceFactory;

impl ApplicationServiceFactory {
    /// Full service for the HTTP server: both exchanges, spreadsheet archive
    /// and notifier.
    pub async fn create(
        config: &AppConfig,
    ) -> error_stack::Result<VolumeReportService, ServiceFactoryError> {
        let sheets_config = config
            .sheets()
            .change_context(ServiceFactoryError::MissingSpreadsheetConfig)?
            .clone();

        let spreadsheet_manager = SpreadsheetManager::new(sheets_config)
            .await
            .change_context(ServiceFactoryError::SpreadsheetSetupFailed)?;

        let client = reqwest::Client::new();
        let notifier = TelegramNotifier::new(client.clone(), config.telegram.clone());
        if !notifier.is_configured() {
            tracing::warn!("Telegram bot token or chat id missing, notifications are disabled");
        }

        Ok(Self::create_exporter(config, client).with_archive(
            Arc::new(SpreadsheetReportSink::new(Arc::new(spreadsheet_manager))),
            Arc::new(notifier),
        ))
    }

    /// Fetch-and-aggregate only; enough for CSV exports.
    pub fn create_exporter(config: &AppConfig, client: reqwest::Client) -> VolumeReportService {
        VolumeReportService::new(Self::ticker_sources(config, client))
    }

    fn ticker_sources(config: &AppConfig, client: reqwest::Client) -> Vec<Arc<dyn TickerSource>> {
        vec![
            Arc::new(CoinDcxTickerSource::new(
                client.clone(),
                config.exchanges.ticker_url(Exchange::CoinDcx),
            )),
            Arc::new(CoinSwitchTickerSource::new(
                client,
                config.exchanges.ticker_url(Exchange::CoinSwitch),
            )),
        ]
    }
}

