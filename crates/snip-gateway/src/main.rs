use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use snip_codec::{CodecSettings, SqidsCodec};
use snip_core::Shortener;
use snip_gateway::cli::{Cli, ServerKind, StorageBackendArg};
use snip_gateway::{telemetry, App, AppState};
use snip_proto_schema::v1::url_shortener_service_server::UrlShortenerServiceServer;
use snip_shortener::{ShortenerGrpcServer, ShortenerService};
use snip_storage::{InMemoryRepository, MySqlRepository};
use tonic::transport::Server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    telemetry::init(config.app_env);

    info!(
        server = %config.server,
        listen_addr = %config.listen_addr,
        app_env = %config.app_env,
        storage_backend = %config.storage,
        "starting snip server"
    );

    let codec = SqidsCodec::new(
        CodecSettings::builder()
            .alphabet(config.secret_alphabet.as_str())
            .build(),
    );
    if let Err(err) = codec.check() {
        warn!(error = %err, "secret alphabet is invalid, shortening requests will fail");
    }

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::InMemory => {
            Arc::new(ShortenerService::new(InMemoryRepository::new(), codec))
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(mysql_dsn).await?;
            repository.ensure_schema().await?;
            Arc::new(ShortenerService::new(repository, codec))
        }
    };

    let request_timeout = Duration::from_secs(config.request_timeout_secs);
    match config.server {
        ServerKind::Http => {
            let state = AppState::new(shortener, config.public_base_url.clone());
            serve_http(config.listen_addr, state, request_timeout).await?;
        }
        ServerKind::Grpc => {
            serve_grpc(config.listen_addr, shortener, request_timeout).await?;
        }
    }

    info!("graceful shutdown complete");
    Ok(())
}

async fn serve_http(
    listen_addr: SocketAddr,
    state: AppState,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    let router = App::router(state, request_timeout);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn serve_grpc(
    listen_addr: SocketAddr,
    shortener: Arc<dyn Shortener>,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    let service = UrlShortenerServiceServer::new(ShortenerGrpcServer::new(shortener));

    info!(%listen_addr, "grpc server listening");
    Server::builder()
        .timeout(request_timeout)
        .add_service(service)
        .serve_with_shutdown(listen_addr, shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
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

    info!("shutdown signal received, draining connections");
}
