use error_stack::ResultExt;
use google_sheets4::api::{
    AddSheetRequest, BatchUpdateSpreadsheetRequest, GridProperties, Request, Scope,
    SheetProperties, ValueRange,
};
use google_sheets4::Sheets;
use std::fmt::Debug;
use thiserror::Error;
use tracing::instrument;

use super::auth::{self, SheetsAuthError};
use super::http_client::{self, HttpsConnector};
use crate::adapters::config::sheets_config::SpreadsheetConfig;

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    /// The Sheets API answered and refused the request (permissions, bad
    /// request, missing token).
    #[error("{0}")]
    ApiError(String),
    /// The request never got a usable answer (transport, I/O, decoding).
    #[error("{0}")]
    RequestFailed(String),
}

impl SpreadsheetManagerError {
    pub fn from_api_error(err: &google_sheets4::Error) -> Self {
        match err {
            google_sheets4::Error::BadRequest(_)
            | google_sheets4::Error::Failure(_)
            | google_sheets4::Error::MissingToken(_)
            | google_sheets4::Error::MissingAPIKey => Self::ApiError(err.to_string()),
            _ => Self::RequestFailed(err.to_string()),
        }
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> error_stack::Result<Self, SheetsAuthError> {
        let secret = auth::decode_service_account_key(&config.credentials_base64)?;
        let client = http_client::http_client()?;
        let auth = auth::auth(secret, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    #[instrument]
    pub(super) async fn add_sheet(
        &self,
        title: &str,
        row_count: usize,
        column_count: usize,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![Request {
                add_sheet: Some(AddSheetRequest {
                    properties: Some(SheetProperties {
                        title: Some(title.to_string()),
                        grid_properties: Some(GridProperties {
                            row_count: Some(i32::try_from(row_count).unwrap_or(i32::MAX)),
                            column_count: Some(i32::try_from(column_count).unwrap_or(i32::MAX)),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .add_scope(Scope::Drive)
            .doit()
            .await
            .map(|_| ())
            .map_err(|err| {
                let context = SpreadsheetManagerError::from_api_error(&err);
                error_stack::report!(err).change_context(context)
            })
            .attach_printable_lazy(|| format!("Failed to add worksheet '{}'", title))
    }

    #[instrument(skip(value_range))]
    pub(super) async fn write_range(
        &self,
        range: &str,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range)
            .value_input_option("USER_ENTERED")
            .add_scope(Scope::Drive)
            .doit()
            .await
            .map(|_| ())
            .map_err(|err| {
                let context = SpreadsheetManagerError::from_api_error(&err);
                error_stack::report!(err).change_context(context)
            })
            .attach_printable_lazy(|| format!("Failed to write to range {}", range))
    }
}
