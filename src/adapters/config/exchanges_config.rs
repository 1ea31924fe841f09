use crate::domain::exchange::Exchange;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ExchangesConfig {
    #[serde(default = "default_coindcx_ticker_url")]
    pub coindcx_ticker_url: Box<str>,
    #[serde(default = "default_coinswitch_ticker_url")]
    pub coinswitch_ticker_url: Box<str>,
}

impl ExchangesConfig {
    pub fn ticker_url(&self, exchange: Exchange) -> &str {
        match exchange {
            Exchange::CoinDcx => &self.coindcx_ticker_url,
            Exchange::CoinSwitch => &self.coinswitch_ticker_url,
        }
    }
}

impl Default for ExchangesConfig {
    fn default() -> Self {
        Self {
            coindcx_ticker_url: default_coindcx_ticker_url(),
            coinswitch_ticker_url: default_coinswitch_ticker_url(),
        }
    }
}

fn default_coindcx_ticker_url() -> Box<str> {
    Exchange::CoinDcx.default_ticker_url().into()
}

fn default_coinswitch_ticker_url() -> Box<str> {
    Exchange::CoinSwitch.default_ticker_url().into()
}
