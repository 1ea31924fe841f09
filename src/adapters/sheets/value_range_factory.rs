use google_sheets4::api::ValueRange;
use serde_json::{Number, Value};

use crate::domain::volume_row::{Cell, VolumeRow};

pub trait ValueRangeFactory {
    /// A header row followed by one row per report line.
    fn from_report<T: AsRef<str>>(header: &[T], rows: &[VolumeRow]) -> Self;
}

fn wrap_cell(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::String(String::new()),
        Cell::Number(value) => Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.to_string())),
        Cell::Count(count) => Value::Number(Number::from(*count)),
        Cell::Text(text) => Value::String(text.clone()),
    }
}

impl ValueRangeFactory for ValueRange {
    fn from_report<T: AsRef<str>>(header: &[T], rows: &[VolumeRow]) -> Self {
        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(
            header
                .iter()
                .map(|title| Value::String(title.as_ref().to_owned()))
                .collect::<Vec<_>>(),
        );
        values.extend(
            rows.iter()
                .map(|row| row.cells().iter().map(wrap_cell).collect::<Vec<_>>()),
        );

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
