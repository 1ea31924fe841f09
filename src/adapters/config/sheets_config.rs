#[derive(serde::Deserialize, Clone)]
pub struct SpreadsheetConfig {
    /// Service-account key JSON, base64 encoded.
    pub credentials_base64: Box<str>,
    pub spreadsheet_id: Box<str>,
    #[serde(default = "default_spreadsheet_name")]
    pub spreadsheet_name: Box<str>,
}

fn default_spreadsheet_name() -> Box<str> {
    "Crypto Volume Report".into()
}

impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("credentials_base64", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("spreadsheet_name", &self.spreadsheet_name)
            .finish()
    }
}
