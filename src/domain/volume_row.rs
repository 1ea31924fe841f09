pub const COLUMNS: [&str; 6] = [
    "Coin",
    "Last Price",
    "24h Volume",
    "Timestamp",
    "Total Count",
    "% Contribution",
];

pub const TOTAL_COIN: &str = "Total";
pub const TOTAL_CONTRIBUTION: &str = "100.00";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    Percent(f64),
    /// The total row always reads `100.00`, whatever the asset rows add up to.
    Total,
}

/// One line of the volume report: an asset row or the trailing total row.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRow {
    pub coin: String,
    pub last_price: Option<f64>,
    pub volume: f64,
    pub timestamp: Option<String>,
    pub total_count: Option<usize>,
    pub contribution: Contribution,
}

/// A single rendered cell, typed so spreadsheet writes keep numbers numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Count(usize),
    Text(String),
}

impl VolumeRow {
    pub fn asset(coin: impl Into<String>, last_price: f64, volume: f64, timestamp: String) -> Self {
        Self {
            coin: coin.into(),
            last_price: Some(last_price),
            volume,
            timestamp: Some(timestamp),
            total_count: None,
            contribution: Contribution::Percent(0.0),
        }
    }

    pub fn total(total_volume: f64, total_count: usize) -> Self {
        Self {
            coin: TOTAL_COIN.to_string(),
            last_price: None,
            volume: total_volume,
            timestamp: None,
            total_count: Some(total_count),
            contribution: Contribution::Total,
        }
    }

    pub fn is_total(&self) -> bool {
        self.contribution == Contribution::Total
    }

    pub fn percent(&self) -> Option<f64> {
        match self.contribution {
            Contribution::Percent(percent) => Some(percent),
            Contribution::Total => None,
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell; 6] {
        [
            Cell::Text(self.coin.clone()),
            self.last_price.map_or(Cell::Empty, Cell::Number),
            Cell::Number(self.volume),
            self.timestamp.clone().map_or(Cell::Empty, Cell::Text),
            self.total_count.map_or(Cell::Empty, Cell::Count),
            match self.contribution {
                Contribution::Percent(percent) => Cell::Number(percent),
                Contribution::Total => Cell::Text(TOTAL_CONTRIBUTION.to_string()),
            },
        ]
    }

    pub fn rendered(&self) -> Vec<String> {
        self.cells().iter().map(Cell::render).collect()
    }
}

impl Cell {
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(value) => format_float(*value),
            Cell::Count(count) => count.to_string(),
            Cell::Text(text) => text.clone(),
        }
    }
}

/// Shortest round-trip form, keeping a `.0` on integral values (`40.0`, not
/// `40`). Magnitudes below `1e-4` or from `1e16` up switch to exponent form
/// with a signed two-digit exponent (`8e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!(
                "{}e{}{:02}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.abs()
            ),
            Err(_) => formatted,
        },
        None => formatted,
    }
}
