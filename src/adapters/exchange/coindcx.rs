use error_stack::report;
use serde_json::Value;
use tracing::instrument;

use super::http::{fetch_json, json_type_name};
use crate::domain::exchange::Exchange;
use crate::domain::ticker::{RawTickerPayload, TickerRecord};
use crate::ports::ticker_source::{TickerSource, TickerSourceError};

/// CoinDCX publishes every market in one JSON list of
/// `{market, last_price, volume, ..}` objects.
#[derive(Debug, Clone)]
pub struct CoinDcxTickerSource {
    client: reqwest::Client,
    url: String,
}

impl CoinDcxTickerSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

pub fn parse_ticker_list(body: Value) -> error_stack::Result<RawTickerPayload, TickerSourceError> {
    match body {
        Value::Array(items) => Ok(RawTickerPayload::Listed(items)),
        other => Err(report!(TickerSourceError::UnexpectedFormat(
            json_type_name(&other).to_string()
        ))),
    }
}

#[async_trait::async_trait]
impl TickerSource for CoinDcxTickerSource {
    fn exchange(&self) -> Exchange {
        Exchange::CoinDcx
    }

    #[instrument(skip(self), name = "CoinDcxTickerSource::fetch_tickers")]
    async fn fetch_tickers(&self) -> error_stack::Result<Vec<TickerRecord>, TickerSourceError> {
        let body = fetch_json(&self.client, &self.url).await?;
        let records = parse_ticker_list(body)?.into_records();
        tracing::info!("CoinDCX: ☁️  Fetched {} tickers", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_ticker_list() {
        let body = json!([
            {"market": "BTCINR", "last_price": "100", "volume": "10", "bid": "99"},
            {"market": "ETHINR", "last_price": "50", "volume": "30"}
        ]);

        let records = parse_ticker_list(body).unwrap().into_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "BTCINR");
        assert_eq!(records[1].parsed_volume(), Some(30.0));
    }

    #[test]
    fn test_parse_ticker_list_rejects_objects() {
        let report = parse_ticker_list(json!({"message": "rate limited"})).unwrap_err();
        assert_eq!(
            report.current_context().to_string(),
            "Unexpected data format: object"
        );
    }

    #[test]
    fn test_source_reports_its_exchange() {
        let source = CoinDcxTickerSource::new(reqwest::Client::new(), Exchange::COINDCX_TICKER_URL);
        assert_eq!(source.exchange(), Exchange::CoinDcx);
    }
}
