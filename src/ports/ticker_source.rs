use thiserror::Error;

use crate::domain::exchange::Exchange;
use crate::domain::ticker::TickerRecord;

#[derive(Error, Debug)]
pub enum TickerSourceError {
    #[error("HTTP request failed")]
    HttpError,
    #[error("JSON parsing failed")]
    JsonError,
    #[error("Unexpected data format: {0}")]
    UnexpectedFormat(String),
}

#[async_trait::async_trait]
pub trait TickerSource: Send + Sync {
    fn exchange(&self) -> Exchange;

    /// Fetches the exchange's 24h tickers, mapped to canonical records in
    /// upstream order.
    async fn fetch_tickers(&self) -> error_stack::Result<Vec<TickerRecord>, TickerSourceError>;
}
