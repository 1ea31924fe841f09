use hyper::StatusCode;

use crate::domain::volume_row::VolumeRow;

/// What a worksheet write reports back to the caller, whether it worked or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOutcome {
    pub message: String,
    pub status: StatusCode,
}

impl SinkOutcome {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[async_trait::async_trait]
pub trait WorksheetSink: Send + Sync {
    /// Writes the header and every row into a new worksheet called `title`.
    /// Failures are folded into the outcome instead of being returned.
    async fn write_report(&self, title: &str, rows: &[VolumeRow]) -> SinkOutcome;
}
