use crate::domain::report_time;
use crate::domain::ticker::TickerRecord;
use crate::domain::volume_row::{Contribution, VolumeRow};

pub const DEFAULT_MARKET: &str = "INR";
/// The stablecoin pair dominates INR volume and is left out of every report.
pub const EXCLUDED_SYMBOL: &str = "USDTINR";

/// Builds the volume report: one asset row per usable ticker, in upstream
/// order, followed by a single total row.
///
/// Records whose price or volume does not parse are skipped with a warning.
/// The asset rows' contributions are rounded independently and are not
/// renormalized, so they may not add up to exactly 100.
pub fn aggregate(
    records: &[TickerRecord],
    market_suffix: &str,
    excluded_symbol: &str,
) -> Vec<VolumeRow> {
    let mut rows = Vec::new();
    let mut total_volume = 0.0;

    for record in records {
        if !record.symbol.ends_with(market_suffix) || record.symbol == excluded_symbol {
            continue;
        }

        let (Some(volume), Some(last_price)) = (record.parsed_volume(), record.parsed_price())
        else {
            tracing::warn!(
                "Invalid data for {}: volume or last_price is not a number.",
                record.symbol
            );
            continue;
        };

        total_volume += volume;
        rows.push(VolumeRow::asset(
            record.symbol.clone(),
            last_price,
            volume,
            report_time::row_timestamp(),
        ));
    }

    let total_count = rows.len();

    for row in rows.iter_mut() {
        let percent = if total_volume > 0.0 {
            round2(row.volume / total_volume * 100.0)
        } else {
            0.0
        };
        row.contribution = Contribution::Percent(percent);
    }

    rows.push(VolumeRow::total(total_volume, total_count));
    rows
}

/// Two-decimal rounding on the exact binary value, ties to even
/// (`0.125` -> `0.12`, `0.375` -> `0.38`).
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(symbol: &str, price: Value, volume: Value) -> TickerRecord {
        TickerRecord::new(symbol, price, volume)
    }

    fn asset_rows(rows: &[VolumeRow]) -> &[VolumeRow] {
        &rows[..rows.len() - 1]
    }

    #[test]
    fn test_btc_eth_usdt_scenario() {
        let records = vec![
            record("BTCINR", json!("100"), json!("10")),
            record("ETHINR", json!("50"), json!("30")),
            record("USDTINR", json!("1"), json!("999")),
        ];

        let rows = aggregate(&records, DEFAULT_MARKET, EXCLUDED_SYMBOL);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].coin, "BTCINR");
        assert_eq!(rows[0].last_price, Some(100.0));
        assert_eq!(rows[0].volume, 10.0);
        assert_eq!(rows[0].percent(), Some(25.0));
        assert_eq!(rows[1].coin, "ETHINR");
        assert_eq!(rows[1].volume, 30.0);
        assert_eq!(rows[1].percent(), Some(75.0));

        let total = &rows[2];
        assert_eq!(total.coin, "Total");
        assert_eq!(total.last_price, None);
        assert_eq!(total.volume, 40.0);
        assert_eq!(total.timestamp, None);
        assert_eq!(total.total_count, Some(2));
        assert_eq!(total.contribution, Contribution::Total);
    }

    #[test]
    fn test_empty_matching_set_yields_only_total_row() {
        let records = vec![record("BTCUSDT", json!("1"), json!("5"))];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);

        assert_eq!(rows, vec![VolumeRow::total(0.0, 0)]);
    }

    #[test]
    fn test_no_records_at_all() {
        let rows = aggregate(&[], "INR", EXCLUDED_SYMBOL);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_total());
        assert_eq!(rows[0].rendered()[5], "100.00");
    }

    #[test]
    fn test_non_numeric_record_is_skipped_without_aborting() {
        let records = vec![
            record("BTCINR", json!("100"), json!("N/A")),
            record("ETHINR", json!("abc"), json!("5")),
            record("XRPINR", Value::Null, json!("5")),
            record("SOLINR", json!("20"), json!("4")),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].coin, "SOLINR");
        assert_eq!(rows[0].percent(), Some(100.0));
        assert_eq!(rows[1].volume, 4.0);
        assert_eq!(rows[1].total_count, Some(1));
    }

    #[test]
    fn test_zero_total_volume_gives_zero_contribution() {
        let records = vec![
            record("BTCINR", json!("100"), json!("0")),
            record("ETHINR", json!("50"), json!(0)),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);

        for row in asset_rows(&rows) {
            assert_eq!(row.percent(), Some(0.0));
        }
        assert_eq!(rows.last().unwrap().volume, 0.0);
        assert_eq!(rows.last().unwrap().total_count, Some(2));
    }

    #[test]
    fn test_filter_invariants_and_total_identity() {
        let records = vec![
            record("BTCINR", json!("1"), json!("0.1")),
            record("BTCUSDT", json!("1"), json!("100")),
            record("USDTINR", json!("1"), json!("100")),
            record("ETHINR", json!("2"), json!("0.2")),
            record("INRBTC", json!("3"), json!("7")),
            record("DOGEINR", json!(0.5), json!(0.3)),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);
        let assets = asset_rows(&rows);
        let total = rows.last().unwrap();

        assert_eq!(assets.len(), 3);
        for row in assets {
            assert!(row.coin.ends_with("INR"));
            assert_ne!(row.coin, EXCLUDED_SYMBOL);
            assert!(!row.is_total());
        }

        let summed = assets.iter().fold(0.0, |acc, row| acc + row.volume);
        assert_eq!(summed, total.volume);
        assert_eq!(total.total_count, Some(assets.len()));
        assert_eq!(rows.iter().filter(|row| row.is_total()).count(), 1);
    }

    #[test]
    fn test_half_cent_ties_round_to_even() {
        let records = vec![
            record("AINR", json!("1"), json!("1")),
            record("BINR", json!("1"), json!("799")),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);

        assert_eq!(rows[0].percent(), Some(0.12));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_contributions_are_rounded_independently() {
        let records = vec![
            record("AINR", json!("1"), json!("1")),
            record("BINR", json!("1"), json!("1")),
            record("CINR", json!("1"), json!("1")),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);
        let percents: Vec<f64> = asset_rows(&rows)
            .iter()
            .filter_map(VolumeRow::percent)
            .collect();

        assert_eq!(percents, vec![33.33, 33.33, 33.33]);
        let sum: f64 = percents.iter().sum();
        assert!((sum - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_upstream_order_is_preserved() {
        let records = vec![
            record("ZECINR", json!("1"), json!("1")),
            record("ADAINR", json!("1"), json!("50")),
            record("MATICINR", json!("1"), json!("3")),
        ];

        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);
        let coins: Vec<&str> = rows.iter().map(|row| row.coin.as_str()).collect();

        assert_eq!(coins, vec!["ZECINR", "ADAINR", "MATICINR", "Total"]);
    }

    #[test]
    fn test_asset_rows_are_timestamped() {
        let records = vec![record("BTCINR", json!("1"), json!("1"))];
        let rows = aggregate(&records, "INR", EXCLUDED_SYMBOL);
        assert_eq!(rows[0].timestamp.as_ref().map(String::len), Some(19));
        assert_eq!(rows[0].total_count, None);
    }

    #[test]
    fn test_other_market_suffix() {
        let records = vec![
            record("BTCUSDT", json!("60000"), json!("3")),
            record("BTCINR", json!("5000000"), json!("1")),
            record("ETHUSDT", json!("3000"), json!("1")),
        ];

        let rows = aggregate(&records, "USDT", EXCLUDED_SYMBOL);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].percent(), Some(75.0));
        assert_eq!(rows[1].percent(), Some(25.0));
    }
}
