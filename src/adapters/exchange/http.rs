use error_stack::ResultExt;
use serde_json::Value;
use tracing::instrument;

use crate::ports::ticker_source::TickerSourceError;

/// One GET, body parsed as JSON. No status check, retries or caching: a
/// non-JSON error page fails as a parse error.
#[instrument(skip(client))]
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
) -> error_stack::Result<Value, TickerSourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .change_context(TickerSourceError::HttpError)
        .attach_printable_lazy(|| format!("GET {} failed", url))?;

    tracing::debug!("GET {} -> {}", url, response.status());

    response
        .json::<Value>()
        .await
        .change_context(TickerSourceError::JsonError)
        .attach_printable_lazy(|| format!("Response from {} is not valid JSON", url))
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
