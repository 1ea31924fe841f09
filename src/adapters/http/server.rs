use error_stack::ResultExt;
use hyper::service::{make_service_fn, service_fn};
use hyper::Server;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

use super::router::VolumeReportRouter;

#[derive(Error, Debug)]
pub enum HttpServerError {
    #[error("Failed to bind {0}")]
    BindFailed(SocketAddr),
    #[error("HTTP server stopped unexpectedly")]
    ServeFailed,
}

/// Serves the router until `shutdown` resolves, letting in-flight requests
/// finish.
pub async fn serve(
    router: Arc<VolumeReportRouter>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()>,
) -> error_stack::Result<(), HttpServerError> {
    let make_service = make_service_fn(move |_conn| {
        let router = Arc::clone(&router);
        async move {
            Ok::<_, Infallible>(service_fn(move |request| {
                let router = Arc::clone(&router);
                async move { Ok::<_, Infallible>(router.handle(request).await) }
            }))
        }
    });

    let server = Server::try_bind(&addr)
        .change_context(HttpServerError::BindFailed(addr))?
        .serve(make_service);

    tracing::info!("Listening on http://{}", server.local_addr());

    server
        .with_graceful_shutdown(shutdown)
        .await
        .change_context(HttpServerError::ServeFailed)
}
