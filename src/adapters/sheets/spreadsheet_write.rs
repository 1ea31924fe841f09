use google_sheets4::api::ValueRange;
use tracing::instrument;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};

#[async_trait::async_trait]
pub trait SpreadsheetWrite: Send + Sync {
    fn spreadsheet_name(&self) -> &str;

    async fn add_worksheet(
        &self,
        title: &str,
        row_count: usize,
        column_count: usize,
    ) -> error_stack::Result<(), SpreadsheetManagerError>;

    /// Writes `value_range` starting at the top-left cell of worksheet `title`.
    async fn write_worksheet(
        &self,
        title: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetManagerError>;
}

/// A1 reference to the first cell of a worksheet, quoting the title.
pub fn worksheet_origin(title: &str) -> String {
    format!("'{}'!A1", title.replace('\'', "''"))
}

#[async_trait::async_trait]
impl SpreadsheetWrite for SpreadsheetManager {
    fn spreadsheet_name(&self) -> &str {
        &self.config.spreadsheet_name
    }

    #[instrument]
    async fn add_worksheet(
        &self,
        title: &str,
        row_count: usize,
        column_count: usize,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.add_sheet(title, row_count, column_count).await
    }

    #[instrument(skip(value_range))]
    async fn write_worksheet(
        &self,
        title: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.write_range(&worksheet_origin(title), value_range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_origin() {
        assert_eq!(worksheet_origin("CoinDCX 2024-05-01"), "'CoinDCX 2024-05-01'!A1");
        assert_eq!(worksheet_origin("Bob's"), "'Bob''s'!A1");
    }
}
