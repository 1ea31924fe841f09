use error_stack::{report, ResultExt};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

use crate::adapters::report::csv_report::CsvReport;
use crate::domain::exchange::Exchange;
use crate::domain::report_time;
use crate::domain::volume::{aggregate, EXCLUDED_SYMBOL};
use crate::domain::volume_row::VolumeRow;
use crate::ports::notifier::Notifier;
use crate::ports::report_sink::{SinkOutcome, WorksheetSink};
use crate::ports::ticker_source::TickerSource;

#[derive(Error, Debug)]
pub enum VolumeReportError {
    #[error("No ticker source registered for {0}")]
    SourceUnavailable(Exchange),
    #[error("Failed to fetch tickers from {0}")]
    FetchFailed(Exchange),
    #[error("Failed to render CSV report")]
    CsvFailed,
    #[error("Spreadsheet archiving is not configured")]
    ArchiveUnavailable,
}

struct Archive {
    sink: Arc<dyn WorksheetSink>,
    notifier: Arc<dyn Notifier>,
}

/// Runs the fetch → aggregate → render pipeline for a single request.
pub struct VolumeReportService {
    sources: HashMap<Exchange, Arc<dyn TickerSource>>,
    archive: Option<Archive>,
}

impl VolumeReportService {
    pub fn new(sources: Vec<Arc<dyn TickerSource>>) -> Self {
        Self {
            sources: sources
                .into_iter()
                .map(|source| (source.exchange(), source))
                .collect(),
            archive: None,
        }
    }

    pub fn with_archive(
        mut self,
        sink: Arc<dyn WorksheetSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        self.archive = Some(Archive { sink, notifier });
        self
    }

    #[instrument(skip(self))]
    pub async fn build_report(
        &self,
        exchange: Exchange,
        market_suffix: &str,
    ) -> error_stack::Result<Vec<VolumeRow>, VolumeReportError> {
        let source = self
            .sources
            .get(&exchange)
            .ok_or_else(|| report!(VolumeReportError::SourceUnavailable(exchange)))?;

        let records = source
            .fetch_tickers()
            .await
            .change_context(VolumeReportError::FetchFailed(exchange))?;

        let rows = aggregate(&records, market_suffix, EXCLUDED_SYMBOL);
        if let Some(total) = rows.last() {
            tracing::info!(
                "{}: 📋 {} {} pairs, total 24h volume {}",
                exchange,
                total.total_count.unwrap_or_default(),
                market_suffix,
                total.volume
            );
        }

        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn csv_report(
        &self,
        exchange: Exchange,
        market_suffix: &str,
    ) -> error_stack::Result<CsvReport, VolumeReportError> {
        let rows = self.build_report(exchange, market_suffix).await?;
        CsvReport::render(market_suffix, &rows).change_context(VolumeReportError::CsvFailed)
    }

    /// Writes the report to a new dated worksheet, then forwards the sink's
    /// message to the notifier. Sink failures come back as an outcome, not an
    /// error; only fetching can fail here.
    #[instrument(skip(self))]
    pub async fn archive_report(
        &self,
        exchange: Exchange,
        market_suffix: &str,
    ) -> error_stack::Result<SinkOutcome, VolumeReportError> {
        let archive = self
            .archive
            .as_ref()
            .ok_or_else(|| report!(VolumeReportError::ArchiveUnavailable))?;

        let rows = self.build_report(exchange, market_suffix).await?;
        let title = exchange.worksheet_title(&report_time::worksheet_date());

        tracing::info!("{}: 📝 Writing worksheet '{}'", exchange, title);
        let outcome = archive.sink.write_report(&title, &rows).await;
        if !outcome.is_success() {
            tracing::warn!("{}: worksheet '{}' not written ({})", exchange, title, outcome.status);
        }
        archive.notifier.notify(&outcome.message).await;

        Ok(outcome)
    }
}
