//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the
//! domain crates' error types rendered through `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use auth::application::{ProvisionIdentityUseCase, ProvisionInput};
use auth::{
    AuthConfig, AuthGate, InMemoryAuthRepository, PgAuthRepository, TokenService, auth_router,
};
use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use posts::{
    IdentityAuthorDirectory, InMemoryPostRepository, PgPostRepository, PostsConfig, posts_router,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,posts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let mut auth_config = match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => AuthConfig::with_secret(secret),
        _ if cfg!(debug_assertions) => {
            tracing::warn!(
                "JWT_SECRET not set, using a random secret; tokens will not survive a restart"
            );
            AuthConfig::with_random_secret()
        }
        _ => anyhow::bail!("JWT_SECRET must be set in production"),
    };
    auth_config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));
    let gate = AuthGate::new(tokens.clone(), &auth_config);
    let posts_config = Arc::new(PostsConfig::default());

    // Stores: PostgreSQL when configured, otherwise in-memory
    let api = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .context("failed to connect to database")?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let auth_repo = PgAuthRepository::new(pool.clone());
            Router::new()
                .nest(
                    "/api/auth",
                    auth_router(auth_repo.clone(), auth_config.clone(), tokens.clone()),
                )
                .nest(
                    "/api/posts",
                    posts_router(
                        PgPostRepository::new(pool),
                        IdentityAuthorDirectory::new(Arc::new(auth_repo)),
                        posts_config,
                        gate,
                    ),
                )
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores; data is lost on restart");

            let auth_repo = InMemoryAuthRepository::new();
            seed_identity(&auth_repo, auth_config.clone()).await?;

            Router::new()
                .nest(
                    "/api/auth",
                    auth_router(auth_repo.clone(), auth_config.clone(), tokens.clone()),
                )
                .nest(
                    "/api/posts",
                    posts_router(
                        InMemoryPostRepository::new(),
                        IdentityAuthorDirectory::new(Arc::new(auth_repo)),
                        posts_config,
                        gate,
                    ),
                )
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static("x-auth-token"),
        ]))
        .allow_credentials(true);

    // Build router
    let app = api.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Provision one identity from `SEED_EMAIL` / `SEED_PASSWORD` (and optional
/// `SEED_NAME`) so the in-memory server has someone to sign in as.
async fn seed_identity(
    repo: &InMemoryAuthRepository,
    config: Arc<AuthConfig>,
) -> anyhow::Result<()> {
    let (Ok(email), Ok(password)) = (env::var("SEED_EMAIL"), env::var("SEED_PASSWORD")) else {
        return Ok(());
    };

    let identity = ProvisionIdentityUseCase::new(Arc::new(repo.clone()), config)
        .execute(ProvisionInput {
            name: env::var("SEED_NAME").unwrap_or_else(|_| "dev".to_string()),
            email,
            password,
            avatar: None,
        })
        .await
        .context("failed to seed identity")?;

    tracing::info!(user_id = %identity.user_id, "Seeded identity");

    Ok(())
}
