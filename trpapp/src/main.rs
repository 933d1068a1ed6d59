use axum::http::{
    HeaderValue,
    Method,
    header::CONTENT_TYPE,
};
use clap::Parser;
use std::{
    sync::Arc,
    time::Duration,
};
use tower_http::cors::{
    AllowOrigin,
    CorsLayer,
};
use trpapp::{
    api::{
        AppState,
        router,
    },
    conf::Cli,
};
use trpdb_sqlite::SqliteBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("trpcore")
        .module("trpdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let backend = SqliteBackend::from_url(&args.trpapp_db_url)
        .await?
        .run_migration()
        .await?;

    let allow_origin = if args.cors_allow_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            args.cors_allow_origins.iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?
        )
    };
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(allow_origin)
        .max_age(Duration::from_secs(60 * 60));

    let state = AppState {
        backend: Arc::new(backend),
        query_timeout: Duration::from_secs(args.query_timeout_secs),
    };
    let app = router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&args.listen_addr).await?;
    log::info!("listening on http://{}", &args.listen_addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        log::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        log::info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
