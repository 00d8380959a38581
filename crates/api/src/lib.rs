//! HTTP health-check service.
//!
//! Building the request handler ([`create_app`]) is kept separate from
//! binding a socket ([`bind`]) and accepting connections ([`serve`]): tests
//! drive the router directly, and only the binary entry point listens.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;

/// Creates the Axum application router.
///
/// `GET /` answers the health check; every other method or path falls
/// through to a 404. JSON bodies are parsed before routing.
pub fn create_app() -> Router {
    Router::new()
        .route(
            "/",
            get(routes::health::check).fallback(routes::not_found::handler),
        )
        .fallback(routes::not_found::handler)
        .layer(axum::middleware::from_fn(middleware::parse_json_body))
        .layer(axum::middleware::from_fn(middleware::track_requests))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listening socket described by `config`.
pub async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    Ok(listener)
}

/// Serves `app` on `listener` until `shutdown` resolves, then drains
/// in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
