use anyhow::Result;
use blog_core::{
    application::services::ApplicationServices,
    config::AppConfig,
    domain::article::ArticleGateway,
    infrastructure::{database, repositories::SqliteArticleGateway, time::SystemClock},
    presentation::http::{
        routes::build_router,
        state::{BasicCredentials, HttpState},
        views::Views,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database connection succeeded");

    let article_gateway: Arc<dyn ArticleGateway> = Arc::new(SqliteArticleGateway::new(
        pool,
        Arc::new(SystemClock::default()),
    ));
    let services = Arc::new(ApplicationServices::new(article_gateway));

    let state = HttpState {
        services,
        views: Arc::new(Views::new()?),
        credentials: Arc::new(BasicCredentials::new(
            config.basic_username(),
            config.basic_password(),
        )),
        id_parsing: config.id_parsing(),
    };
    tracing::info!(id_parsing = ?state.id_parsing, "identifier parsing policy");

    let app = build_router(state, config.static_dir());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
