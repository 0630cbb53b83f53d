use anyhow::Result;
use linkpage_core::application::{
    ports::{security::TokenVerifier, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use linkpage_core::config::AppConfig;
use linkpage_core::domain::{
    avatar::AvatarRepository,
    link::LinkRepository,
    page::{PageReadRepository, PageWriteRepository},
};
use linkpage_core::infrastructure::{
    database,
    repositories::{
        PostgresAvatarRepository, PostgresLinkRepository, PostgresPageReadRepository,
        PostgresPageWriteRepository,
    },
    security::token::BiscuitTokenVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use linkpage_core::presentation::http::{routes::build_router, state::HttpState};
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

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let page_write_repo: Arc<dyn PageWriteRepository> =
        Arc::new(PostgresPageWriteRepository::new(pool.clone()));
    let page_read_repo: Arc<dyn PageReadRepository> =
        Arc::new(PostgresPageReadRepository::new(pool.clone()));
    let link_repo: Arc<dyn LinkRepository> = Arc::new(PostgresLinkRepository::new(pool.clone()));
    let avatar_repo: Arc<dyn AvatarRepository> = Arc::new(PostgresAvatarRepository::new(pool));

    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(BiscuitTokenVerifier::new(config.auth_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        page_write_repo,
        page_read_repo,
        link_repo,
        avatar_repo,
        token_verifier,
        clock,
        slugger,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
