use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidhive::application::{
    ports::{
        media::MediaStorage,
        security::{PasswordHasher, TokenIssuer},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use vidhive::config::AppConfig;
use vidhive::domain::{user::UserRepository, video::VideoRepository};
use vidhive::infrastructure::{
    database,
    media::FsMediaStorage,
    repositories::{PostgresUserRepository, PostgresVideoRepository},
    security::{password::Argon2PasswordHasher, token::JwtTokenIssuer},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use vidhive::presentation::http::{routes::build_router, state::HttpState};

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let video_repo: Arc<dyn VideoRepository> = Arc::new(PostgresVideoRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(
        config.access_token_secret(),
        config.refresh_token_secret(),
        config.access_token_ttl(),
        config.refresh_token_ttl(),
    ));
    let media_storage: Arc<dyn MediaStorage> = Arc::new(FsMediaStorage::new(
        config.media_root(),
        config.media_base_url(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        video_repo,
        password_hasher,
        token_issuer,
        media_storage,
        clock,
        slugger,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
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
