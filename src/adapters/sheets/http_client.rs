use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use super::auth::SheetsAuthError;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Client shared by the authenticator and the Sheets hub. Fails when the
/// platform trust store cannot be loaded.
pub fn http_client() -> error_stack::Result<hyper::Client<HttpsConnector>, SheetsAuthError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SheetsAuthError::TlsRootsUnavailable)?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
