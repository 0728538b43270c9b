//! warp integration and the development server.
//!
//! The middleware sits in front of `warp::fs::dir`: every asset request
//! first runs through the dispatcher, which recompiles a stale artifact
//! before file serving reads it. Dispatcher failures travel through warp's
//! rejection channel and surface as 500 responses.

use crate::config::Config;
use crate::error::{ConfigError, MiddlewareError, Result};
use crate::middleware::AssetCompiler;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Filter that recompiles stale artifacts before extraction continues.
/// Extracts nothing on pass-through or successful compilation; rejects with
/// the middleware error on failure.
pub fn compile_filter(
    middleware: Arc<AssetCompiler>,
) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::method()
        .and(warp::path::full())
        .and_then(move |method: warp::http::Method, path: warp::path::FullPath| {
            let middleware = middleware.clone();
            async move {
                match middleware.handle(&method, path.as_str()).await {
                    Ok(_) => Ok(()),
                    Err(e) => Err(warp::reject::custom(e)),
                }
            }
        })
        .untuple_one()
}

/// Full route set: health check, then compile-and-serve for everything else.
pub fn routes(
    middleware: Arc<AssetCompiler>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let dest_dir = middleware.dest_dir().to_path_buf();

    let health = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "service": "asset-compiler"
        }))
    });

    let assets = compile_filter(middleware).and(warp::fs::dir(dest_dir));

    health.or(assets)
}

pub async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let (status, message) = if let Some(e) = err.find::<MiddlewareError>() {
        tracing::error!("request failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    let json = warp::reply::json(&serde_json::json!({ "error": message }));
    Ok(warp::reply::with_status(json, status))
}

/// Build the middleware from `config` and serve until ctrl-c.
pub async fn start_server(config: Config) -> Result<()> {
    let middleware = Arc::new(AssetCompiler::new(&config)?);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| ConfigError::Parse(format!("Invalid listen address: {}", e)))?;

    let routes = routes(middleware).recover(handle_rejection);

    let (bound, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        let _ = tokio::signal::ctrl_c().await;
    });

    tracing::info!("Serving compiled assets on http://{}", bound);
    server.await;
    tracing::info!("Server stopped");

    Ok(())
}
