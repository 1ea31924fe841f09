use base64::{engine::general_purpose::STANDARD, Engine as _};
use coin_volume_report::{
    adapters::{
        config::app_config::AppConfig,
        http::{router::VolumeReportRouter, server},
        report::csv_report::render_csv,
    },
    domain::{exchange::Exchange, volume::DEFAULT_MARKET},
};
use error_stack::{report, ResultExt};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::application_service_factory::ApplicationServiceFactory;

pub const DEFAULT_CSV_PATH: &str = "coindcx_volume_data.csv";

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },
    #[error("Command execution failed: {details}")]
    ExecutionFailed { details: String },
}

impl CommandError {
    fn execution_failed<S: Into<String>>(details: S) -> Self {
        CommandError::ExecutionFailed {
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve,
    ExportCsv { market: String, output: PathBuf },
    EncodeCredentials { path: PathBuf },
}

pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Ok(Command::Serve),
        Some("export-csv") => Ok(Command::ExportCsv {
            market: args
                .get(2)
                .cloned()
                .unwrap_or_else(|| DEFAULT_MARKET.to_string()),
            output: PathBuf::from(args.get(3).map_or(DEFAULT_CSV_PATH, String::as_str)),
        }),
        Some("encode-credentials") => {
            let path = args.get(2).ok_or_else(|| CommandError::InvalidCommand {
                details: "Path to the service account JSON file required".to_string(),
            })?;
            Ok(Command::EncodeCredentials {
                path: PathBuf::from(path),
            })
        }
        Some(other) => Err(CommandError::InvalidCommand {
            details: format!(
                "Unknown command '{}'. Expected serve, export-csv [MARKET] [PATH] or encode-credentials PATH",
                other
            ),
        }),
    }
}

pub struct CliAdapter {
    config: AppConfig,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("port", &self.config.port)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    #[instrument]
    pub async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::Serve => self.serve().await,
            Command::ExportCsv { market, output } => self.export_csv(&market, output).await,
            Command::EncodeCredentials { path } => encode_credentials(path),
        }
    }

    async fn serve(&self) -> error_stack::Result<String, CommandError> {
        let service = ApplicationServiceFactory::create(&self.config)
            .await
            .change_context(CommandError::execution_failed("Failed to start the server"))?;

        let router = Arc::new(VolumeReportRouter::new(Arc::new(service)));
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.config.port));

        server::serve(router, addr, shutdown_signal())
            .await
            .change_context(CommandError::execution_failed("HTTP server failed"))?;

        Ok("Server stopped".to_string())
    }

    async fn export_csv(
        &self,
        market: &str,
        output: PathBuf,
    ) -> error_stack::Result<String, CommandError> {
        let service =
            ApplicationServiceFactory::create_exporter(&self.config, reqwest::Client::new());

        let rows = service
            .build_report(Exchange::CoinDcx, market)
            .await
            .change_context(CommandError::execution_failed("Failed to build the report"))?;
        let csv = render_csv(&rows)
            .change_context(CommandError::execution_failed("Failed to render the report"))?;

        std::fs::write(&output, csv)
            .change_context(CommandError::execution_failed("Failed to save the report"))
            .attach_printable_lazy(|| format!("Output path: {}", output.display()))?;

        let (total_count, total_volume) = rows
            .last()
            .map(|total| (total.total_count.unwrap_or_default(), total.volume))
            .unwrap_or_default();

        Ok(format!(
            "Data saved to {}\nTotal number of coins: {}\nTotal 24h Volume ({}): {}",
            output.display(),
            total_count,
            market,
            total_volume
        ))
    }
}

fn encode_credentials(path: PathBuf) -> error_stack::Result<String, CommandError> {
    let bytes = std::fs::read(&path)
        .change_context(CommandError::execution_failed("Failed to read credentials file"))
        .attach_printable_lazy(|| format!("Path: {}", path.display()))?;

    if bytes.is_empty() {
        return Err(report!(CommandError::execution_failed(
            "Credentials file is empty"
        )));
    }

    Ok(STANDARD.encode(bytes))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => tracing::error!("Failed to listen for shutdown signal: {}", err),
    }
}
