//! Fruit inventory HTTP server.
//!
//! Configuration comes from the environment (and an optional `.env` file);
//! see `inventory_server::config` for the recognized variables.

use inventory_core::init_logging;
use inventory_server::{create_router, AppState, ServerConfig, ServerError};
use log::{error, info, warn};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={err}");
            eprintln!("inventory-server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(ServerError::Logging)?;

    let state = AppState::open(&config.db_location)?;
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("event=server_start module=server status=ok addr={addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("event=signal_install module=server status=error signal=ctrl_c error={err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("event=signal_install module=server status=error signal=sigterm error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("event=shutdown module=server status=start signal=ctrl_c"),
        () = terminate => info!("event=shutdown module=server status=start signal=sigterm"),
    }
}
