use serde_json::{Map, Value};

/// Canonical 24h ticker entry, independent of the exchange response shape.
///
/// Price and volume are kept as raw JSON so that malformed values reach the
/// aggregator, which drops them record by record.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRecord {
    pub symbol: String,
    pub price: Value,
    pub volume: Value,
}

impl TickerRecord {
    pub fn new(symbol: impl Into<String>, price: Value, volume: Value) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
        }
    }

    pub fn parsed_price(&self) -> Option<f64> {
        parse_number(&self.price)
    }

    pub fn parsed_volume(&self) -> Option<f64> {
        parse_number(&self.volume)
    }
}

/// Ticker payloads as they come off the wire.
#[derive(Debug, Clone)]
pub enum RawTickerPayload {
    /// `[{"market": "BTCINR", "last_price": "..", "volume": ".."}, ..]`
    Listed(Vec<Value>),
    /// `{"BTC/INR": {"openPrice": "..", "quoteVolume": ".."}, ..}`
    Keyed(Map<String, Value>),
}

impl RawTickerPayload {
    pub fn into_records(self) -> Vec<TickerRecord> {
        match self {
            RawTickerPayload::Listed(items) => items
                .into_iter()
                .filter_map(|item| {
                    let symbol = item.get("market")?.as_str()?.to_owned();
                    Some(TickerRecord {
                        symbol,
                        price: field(&item, "last_price"),
                        volume: field(&item, "volume"),
                    })
                })
                .collect(),
            RawTickerPayload::Keyed(entries) => entries
                .into_iter()
                .map(|(symbol, entry)| TickerRecord {
                    price: field(&entry, "openPrice"),
                    volume: field(&entry, "quoteVolume"),
                    symbol,
                })
                .collect(),
        }
    }
}

fn field(item: &Value, name: &str) -> Value {
    item.get(name).cloned().unwrap_or(Value::Null)
}

/// Accepts JSON numbers and numeric strings (surrounding whitespace allowed).
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}
