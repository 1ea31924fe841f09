use error_stack::{Context, FrameKind, Report};
use hyper::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};

use crate::adapters::report::csv_report::CsvReport;

/// Contexts of a report from the outermost inwards, joined with `": "`.
pub fn error_text<C: Context>(report: &Report<C>) -> String {
    report
        .frames()
        .filter_map(|frame| match frame.kind() {
            FrameKind::Context(context) => Some(context.to_string()),
            FrameKind::Attachment(_) => None,
        })
        .collect::<Vec<_>>()
        .join(": ")
}

pub fn text(status: StatusCode, body: impl Into<String>) -> Response<Body> {
    let mut response = Response::new(Body::from(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

pub fn internal_error<C: Context>(report: &Report<C>) -> Response<Body> {
    text(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An error occurred: {}", error_text(report)),
    )
}

pub fn csv_attachment(report: CsvReport) -> Response<Body> {
    let disposition = format!("attachment; filename={}", report.filename);
    let Ok(disposition) = HeaderValue::from_str(&disposition) else {
        return text(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred: invalid filename {:?}", report.filename),
        );
    };

    let mut response = Response::new(Body::from(report.body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    response.headers_mut().insert(CONTENT_DISPOSITION, disposition);
    response
}
