use error_stack::report;
use serde_json::Value;
use tracing::instrument;

use super::http::{fetch_json, json_type_name};
use crate::domain::exchange::Exchange;
use crate::domain::ticker::{RawTickerPayload, TickerRecord};
use crate::ports::ticker_source::{TickerSource, TickerSourceError};

/// CoinSwitch answers with `{"data": {<symbol>: {openPrice, quoteVolume, ..}}}`.
#[derive(Debug, Clone)]
pub struct CoinSwitchTickerSource {
    client: reqwest::Client,
    url: String,
}

impl CoinSwitchTickerSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

pub fn parse_ticker_map(body: Value) -> error_stack::Result<RawTickerPayload, TickerSourceError> {
    let mut root = match body {
        Value::Object(root) => root,
        other => {
            return Err(report!(TickerSourceError::UnexpectedFormat(
                json_type_name(&other).to_string()
            )))
        }
    };

    match root.remove("data") {
        Some(Value::Object(entries)) => Ok(RawTickerPayload::Keyed(entries)),
        Some(other) => Err(report!(TickerSourceError::UnexpectedFormat(format!(
            "data is {}",
            json_type_name(&other)
        )))),
        None => Err(report!(TickerSourceError::UnexpectedFormat(
            "missing data".to_string()
        ))),
    }
}

#[async_trait::async_trait]
impl TickerSource for CoinSwitchTickerSource {
    fn exchange(&self) -> Exchange {
        Exchange::CoinSwitch
    }

    #[instrument(skip(self), name = "CoinSwitchTickerSource::fetch_tickers")]
    async fn fetch_tickers(&self) -> error_stack::Result<Vec<TickerRecord>, TickerSourceError> {
        let body = fetch_json(&self.client, &self.url).await?;
        let records = parse_ticker_map(body)?.into_records();
        tracing::info!("CoinSwitch: ☁️  Fetched {} tickers", records.len());
        Ok(records)
    }
}
