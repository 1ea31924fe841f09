use coin_volume_report::adapters::config::app_config::AppConfig;
use coin_volume_report::prettyprint::prettyprint::PrettyFormatter;
use std::env;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod application_service_factory;
mod cli_adapter;

use cli_adapter::{parse_args, CliAdapter, Command};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    setup_panic_hook();

    let args: Vec<String> = env::args().collect();
    let command = parse_args(&args)?;

    if command == Command::Serve {
        info!("Starting coin-volume-report server");
    } else {
        info!("Running {:?}", command);
    }

    let config = AppConfig::load().map_err(|report| {
        error!("Configuration error: {:?}", report);
        format!("Configuration error: {:?}", report)
    })?;

    let cli_adapter = CliAdapter::new(config);
    let print_result = matches!(command, Command::EncodeCredentials { .. });

    match cli_adapter.handle(command).await {
        Ok(result) => {
            if print_result {
                println!("{}", result);
            } else {
                info!("{}", result);
            }
            Ok(())
        }
        Err(report) => {
            error!("Command failed: {:?}", report);
            Err(format!("Command failed: {:?}", report).into())
        }
    }
}

fn setup_tracing() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_default(tracing::Level::INFO)
                .with_target("coin_volume_report", tracing::Level::DEBUG),
        )
        .with(stdout_layer)
        .init();
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
