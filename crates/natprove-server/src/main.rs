//! natprove REST API server
//!
//! Serves the natural-number proof machines over HTTP. A proof request
//! names a machine by platform pointer and carries an informal
//! arithmetic statement; the response is a three-valued verdict,
//! optionally enriched with the canonical proposition and a
//! machine-checkable proof.

use clap::Parser;
use natprove_core::{MachineConfig, MachineRegistry};
use natprove_server::routes::{self, AppState};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// natprove REST API server
#[derive(Parser, Debug)]
#[command(name = "natprove-server")]
#[command(about = "Natural-number proof machine REST server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5001", env = "NATPROVE_PORT")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1", env = "NATPROVE_HOST")]
    host: String,

    /// Platform pointer the successor machine serves under
    #[arg(long, env = "NATPROVE_SUCCESSOR_MACHINE")]
    successor_machine: Option<String>,

    /// Platform pointer the sum machine serves under
    #[arg(long, env = "NATPROVE_SUM_MACHINE")]
    sum_machine: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = MachineConfig::default();
    if let Some(successor_machine) = args.successor_machine {
        config.successor_machine = successor_machine;
    }
    if let Some(sum_machine) = args.sum_machine {
        config.sum_machine = sum_machine;
    }

    let registry = MachineRegistry::standard(config).expect("machine configuration rejected");
    info!(machines = ?registry.pointers(), "Proof machines registered");

    let state = Arc::new(AppState::new(registry));
    let app = routes::app(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("natprove server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Signal handler for graceful shutdown (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
