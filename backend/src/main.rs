use dotenvy::dotenv;
use std::sync::Arc;
use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use can_backend::{build_pool, config::Config, router, run_migrations, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,can_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::load()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let pool = build_pool(&config.database_url)
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    run_migrations(&pool)?;

    let state = Arc::new(AppState::new(pool));

    let frontend_origin: HeaderValue = config
        .frontend_url
        .parse()
        .with_context(|| format!("Invalid FRONTEND_URL {}", config.frontend_url))?;

    let app = router(state)
        // Built frontend (index.html, wasm bundle, assets)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(frontend_origin))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        );

    tracing::info!("Starting server on port {}", config.port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
