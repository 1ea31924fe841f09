use error_stack::{report, ResultExt};
use thiserror::Error;

use crate::domain::report_time;
use crate::domain::volume_row::{VolumeRow, COLUMNS};

#[derive(Error, Debug)]
pub enum CsvReportError {
    #[error("Failed to serialize CSV row")]
    SerializeError,
    #[error("Failed to flush CSV buffer")]
    FlushError,
}

/// An in-memory CSV file ready to be downloaded or saved.
#[derive(Debug, Clone)]
pub struct CsvReport {
    pub filename: String,
    pub body: Vec<u8>,
}

impl CsvReport {
    pub fn render(
        market_suffix: &str,
        rows: &[VolumeRow],
    ) -> error_stack::Result<Self, CsvReportError> {
        Ok(Self {
            filename: download_filename(market_suffix, &report_time::filename_timestamp()),
            body: render_csv(rows)?,
        })
    }
}

pub fn download_filename(market_suffix: &str, timestamp: &str) -> String {
    format!("coindcx_volume_data_{}_{}.csv", market_suffix, timestamp)
}

#[tracing::instrument(skip(rows), fields(rows = rows.len()))]
pub fn render_csv(rows: &[VolumeRow]) -> error_stack::Result<Vec<u8>, CsvReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .change_context(CsvReportError::SerializeError)?;

    for row in rows {
        writer
            .write_record(row.rendered())
            .change_context(CsvReportError::SerializeError)
            .attach_printable_lazy(|| format!("Failed to write row for {}", row.coin))?;
    }

    writer
        .into_inner()
        .map_err(|err| report!(CsvReportError::FlushError).attach_printable(err.to_string()))
}
