use error_stack::ResultExt;
use google_sheets4::api::ValueRange;
use hyper::StatusCode;
use std::sync::Arc;
use tracing::instrument;

use super::spreadsheet_manager::SpreadsheetManagerError;
use super::spreadsheet_write::SpreadsheetWrite;
use super::value_range_factory::ValueRangeFactory;
use crate::domain::volume_row::{VolumeRow, COLUMNS};
use crate::ports::report_sink::{SinkOutcome, WorksheetSink};

/// Archives each report as a fresh worksheet of the configured spreadsheet.
pub struct SpreadsheetReportSink {
    writer: Arc<dyn SpreadsheetWrite>,
}

impl std::fmt::Debug for SpreadsheetReportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetReportSink")
            .field("spreadsheet", &self.writer.spreadsheet_name())
            .finish()
    }
}

impl SpreadsheetReportSink {
    pub fn new(writer: Arc<dyn SpreadsheetWrite>) -> Self {
        Self { writer }
    }

    async fn write_rows(
        &self,
        title: &str,
        rows: &[VolumeRow],
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.writer
            .add_worksheet(title, rows.len() + 1, COLUMNS.len())
            .await?;

        self.writer
            .write_worksheet(title, ValueRange::from_report(&COLUMNS, rows))
            .await
            .attach_printable_lazy(|| format!("{} rows for worksheet '{}'", rows.len(), title))
    }
}

#[async_trait::async_trait]
impl WorksheetSink for SpreadsheetReportSink {
    #[instrument(skip(rows), fields(rows = rows.len()))]
    async fn write_report(&self, title: &str, rows: &[VolumeRow]) -> SinkOutcome {
        match self.write_rows(title, rows).await {
            Ok(()) => {
                tracing::info!("Sheets: ✅ Wrote worksheet '{}'", title);
                SinkOutcome::new(
                    format!(
                        "Data successfully written to worksheet '{}' in spreadsheet '{}'",
                        title,
                        self.writer.spreadsheet_name()
                    ),
                    StatusCode::OK,
                )
            }
            Err(report) => {
                tracing::error!("Sheets: ❌ {:?}", report);
                match report.current_context() {
                    SpreadsheetManagerError::ApiError(text) => SinkOutcome::new(
                        format!("Spreadsheet API error: {}", text),
                        StatusCode::FORBIDDEN,
                    ),
                    SpreadsheetManagerError::RequestFailed(text) => SinkOutcome::new(
                        format!("An error occurred: {}", text),
                        StatusCode::INTERNAL_SERVER_ERROR,
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_stack::report;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeWriter {
        fail_add: Option<fn() -> SpreadsheetManagerError>,
        fail_write: Option<fn() -> SpreadsheetManagerError>,
        calls: Mutex<Vec<String>>,
        written: Mutex<Option<ValueRange>>,
    }

    #[async_trait::async_trait]
    impl SpreadsheetWrite for FakeWriter {
        fn spreadsheet_name(&self) -> &str {
            "Volume Archive"
        }

        async fn add_worksheet(
            &self,
            title: &str,
            row_count: usize,
            column_count: usize,
        ) -> error_stack::Result<(), SpreadsheetManagerError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("add {} {}x{}", title, row_count, column_count));
            match self.fail_add {
                Some(make_error) => Err(report!(make_error())),
                None => Ok(()),
            }
        }

        async fn write_worksheet(
            &self,
            title: &str,
            value_range: ValueRange,
        ) -> error_stack::Result<(), SpreadsheetManagerError> {
            self.calls.lock().unwrap().push(format!("write {}", title));
            *self.written.lock().unwrap() = Some(value_range);
            match self.fail_write {
                Some(make_error) => Err(report!(make_error())),
                None => Ok(()),
            }
        }
    }

    fn rows() -> Vec<VolumeRow> {
        vec![
            VolumeRow::asset("BTCINR", 100.0, 10.0, "2024-05-01 10:00:00".into()),
            VolumeRow::total(10.0, 1),
        ]
    }

    #[tokio::test]
    async fn test_successful_write() {
        let writer = Arc::new(FakeWriter::default());
        let sink = SpreadsheetReportSink::new(writer.clone());

        let outcome = sink.write_report("CoinDCX 2024-05-01", &rows()).await;

        assert_eq!(outcome.status, StatusCode::OK);
        assert!(outcome.message.contains("CoinDCX 2024-05-01"));
        assert!(outcome.message.contains("Volume Archive"));
        assert_eq!(
            *writer.calls.lock().unwrap(),
            vec!["add CoinDCX 2024-05-01 3x6", "write CoinDCX 2024-05-01"]
        );
        let written = writer.written.lock().unwrap().take().unwrap();
        assert_eq!(written.values.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_api_error_is_forbidden() {
        let writer = Arc::new(FakeWriter {
            fail_write: Some(|| {
                SpreadsheetManagerError::ApiError("The caller does not have permission".into())
            }),
            ..Default::default()
        });
        let sink = SpreadsheetReportSink::new(writer);

        let outcome = sink.write_report("CoinDCX 2024-05-01", &rows()).await;

        assert_eq!(outcome.status, StatusCode::FORBIDDEN);
        assert_eq!(
            outcome.message,
            "Spreadsheet API error: The caller does not have permission"
        );
    }

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let writer = Arc::new(FakeWriter {
            fail_add: Some(|| SpreadsheetManagerError::RequestFailed("connection reset".into())),
            ..Default::default()
        });
        let sink = SpreadsheetReportSink::new(writer.clone());

        let outcome = sink.write_report("CoinSwitch 2024-05-01", &rows()).await;

        assert_eq!(outcome.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(outcome.message, "An error occurred: connection reset");
        assert_eq!(writer.calls.lock().unwrap().len(), 1);
    }
}
