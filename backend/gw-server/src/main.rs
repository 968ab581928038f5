use gw_config::Config;
use gw_node::CancelCoordinator;
use gw_server::{AppState, ServerError, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Logger first, before anything else logs
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting gw-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let cancel = CancelCoordinator::new();
    let mut app_state = AppState::from_config(&config, cancel.clone());

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus recorder installed, serving /metrics");
            app_state = app_state.with_prometheus(handle);
        }
        Err(e) => warn!(
            "{}",
            ServerError::Metrics {
                message: e.to_string()
            }
        ),
    }

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    info!("Server listening on {}", listener.local_addr()?);

    // SIGINT aborts in-flight node calls, then drains the server
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                cancel_for_signal.cancel();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let mut shutdown = cancel.guard();
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("Draining open connections");
        })
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Graceful shutdown complete");
    Ok(())
}
