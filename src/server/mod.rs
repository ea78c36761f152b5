use crate::config::Config;
use crate::streaming::MediaResource;
use anyhow::{Context, Result};
use axum::{middleware, Router};
use bytes::Bytes;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub mod dispatch;
pub mod error;
pub mod page;
pub mod request_log;

/// Shared application context.
///
/// Everything here is read-only after startup; requests share no mutable
/// state.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub media: Arc<MediaResource>,
    /// Landing page, rendered once at startup.
    pub page: Bytes,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let media = MediaResource::from_config(&config.media);
        let page = page::render(&media);
        Self {
            config: Arc::new(config),
            media: Arc::new(media),
            page,
        }
    }
}

/// Create the Axum router
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .fallback(dispatch::dispatch)
        .layer(middleware::from_fn(request_log::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    serve(listener, config).await
}

/// Serve on an already-bound listener until SIGINT or SIGTERM.
pub async fn serve(listener: TcpListener, config: Config) -> Result<()> {
    serve_with_shutdown(listener, config, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// Each accepted connection runs on its own task.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: Config,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    let ctx = AppContext::new(config);

    tracing::info!("Video server running at http://{}", addr);
    tracing::info!(
        "Video available at http://{}{} ({})",
        addr,
        ctx.media.route(),
        ctx.media.path().display()
    );

    let app = create_router(ctx);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
