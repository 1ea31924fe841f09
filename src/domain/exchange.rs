use strum::{Display, EnumIter};

/// Exchanges whose 24h tickers can be turned into a volume report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Exchange {
    #[strum(to_string = "CoinDCX")]
    CoinDcx,
    #[strum(to_string = "CoinSwitch")]
    CoinSwitch,
}

impl Exchange {
    pub const COINDCX_TICKER_URL: &'static str = "https://api.coindcx.com/exchange/ticker";
    pub const COINSWITCH_TICKER_URL: &'static str =
        "https://coinswitch.co/trade/api/v2/24hr/all-pairs/ticker?exchange=coinswitchx";

    pub fn default_ticker_url(&self) -> &'static str {
        match self {
            Exchange::CoinDcx => Self::COINDCX_TICKER_URL,
            Exchange::CoinSwitch => Self::COINSWITCH_TICKER_URL,
        }
    }

    /// Worksheet title used when archiving a report, e.g. `CoinDCX 2024-05-01`.
    pub fn worksheet_title(&self, date: &str) -> String {
        format!("{} {}", self, date)
    }
}
