use std::net::SocketAddr;

use tokio::signal;
use tracing::info;

use fabrik_api::{build_router, config, db, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);
    info!(environment = %cfg.environment, port = cfg.port, "configuration loaded");

    let db = db::connect(&cfg).await?;
    if cfg.auto_migrate {
        db::run_migrations(&db).await?;
    }

    let addr = SocketAddr::new(cfg.host.parse()?, cfg.port);
    let app = build_router(AppState::new(db, cfg));

    info!("fabrik-api listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
