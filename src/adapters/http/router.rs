use hyper::{Body, Method, Request, Response, StatusCode};
use std::sync::Arc;
use tracing::instrument;

use super::query::MarketQuery;
use super::response;
use crate::application::volume_report::VolumeReportService;
use crate::domain::exchange::Exchange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DownloadCsv,
    Archive(Exchange),
    Health,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/download-csv" => Some(Route::DownloadCsv),
            "/coin-dcx-past-24h-volume" => Some(Route::Archive(Exchange::CoinDcx)),
            "/coin-switch-past-24h-volume" => Some(Route::Archive(Exchange::CoinSwitch)),
            "/health" => Some(Route::Health),
            _ => None,
        }
    }
}

/// Maps inbound GET requests onto the report pipeline.
pub struct VolumeReportRouter {
    service: Arc<VolumeReportService>,
}

impl std::fmt::Debug for VolumeReportRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeReportRouter").finish()
    }
}

impl VolumeReportRouter {
    pub fn new(service: Arc<VolumeReportService>) -> Self {
        Self { service }
    }

    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.uri().path()))]
    pub async fn handle(&self, request: Request<Body>) -> Response<Body> {
        let Some(route) = Route::from_path(request.uri().path()) else {
            return response::text(StatusCode::NOT_FOUND, "Not Found");
        };

        if request.method() != Method::GET {
            return response::text(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        }

        let query = MarketQuery::from_query(request.uri().query());
        let response = match route {
            Route::Health => response::text(StatusCode::OK, "ok"),
            Route::DownloadCsv => self.download_csv(&query.market).await,
            Route::Archive(exchange) => self.archive(exchange, &query.market).await,
        };

        tracing::info!("{:?} -> {}", route, response.status());
        response
    }

    async fn download_csv(&self, market: &str) -> Response<Body> {
        match self.service.csv_report(Exchange::CoinDcx, market).await {
            Ok(report) => response::csv_attachment(report),
            Err(report) => {
                tracing::error!("❌ CSV download failed: {:?}", report);
                response::internal_error(&report)
            }
        }
    }

    async fn archive(&self, exchange: Exchange, market: &str) -> Response<Body> {
        match self.service.archive_report(exchange, market).await {
            Ok(outcome) => response::text(outcome.status, outcome.message),
            Err(report) => {
                tracing::error!("❌ {} archive failed: {:?}", exchange, report);
                response::internal_error(&report)
            }
        }
    }
}
