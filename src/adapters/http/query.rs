use serde::Deserialize;

use crate::domain::volume::DEFAULT_MARKET;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketQuery {
    #[serde(default = "default_market")]
    pub market: String,
}

fn default_market() -> String {
    DEFAULT_MARKET.to_string()
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            market: default_market(),
        }
    }
}

impl MarketQuery {
    /// Parses `?market=..`. An explicitly empty value is kept as the empty
    /// suffix; a query that cannot be decoded falls back to the default.
    pub fn from_query(query: Option<&str>) -> Self {
        let query = query.unwrap_or_default();
        serde_urlencoded::from_str(query).unwrap_or_else(|err| {
            tracing::warn!("Ignoring malformed query '{}': {}", query, err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_market() {
        assert_eq!(MarketQuery::from_query(None).market, "INR");
        assert_eq!(MarketQuery::from_query(Some("")).market, "INR");
        assert_eq!(MarketQuery::from_query(Some("foo=bar")).market, "INR");
    }

    #[test]
    fn test_explicit_market() {
        assert_eq!(MarketQuery::from_query(Some("market=USDT")).market, "USDT");
        assert_eq!(
            MarketQuery::from_query(Some("x=1&market=BTC")).market,
            "BTC"
        );
    }

    #[test]
    fn test_empty_market_is_kept() {
        assert_eq!(MarketQuery::from_query(Some("market=")).market, "");
    }

    #[test]
    fn test_percent_encoded_market() {
        assert_eq!(MarketQuery::from_query(Some("market=%2FINR")).market, "/INR");
    }
}
