//! To-do list API server binary.
//!
//! Loads `.env`, validates the signing secrets, opens and migrates the
//! database, then serves the API until Ctrl-C.

use clap::Parser;
use tracing::{info, warn};

use todo_api::config::{ApiConfig, is_production};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "todo_server", about = "To-do list API server")]
struct Args {
    /// Interface to bind. Overrides the host part of `BIND_ADDR`.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on. Overrides the port part of `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// SQLite connection URL [default: sqlite://todo.sqlite].
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Deployment environment; `production` marks session cookies `Secure`.
    #[arg(long, env = "APP_ENV")]
    app_env: Option<String>,

    /// Insert the demo accounts (john, jane) if they are missing.
    #[arg(long, default_value_t = false)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,todo_api=debug,todo_core=debug")
                }),
        )
        .init();

    let args = Args::parse();

    // Missing secrets are fatal before anything else is touched.
    let mut config = ApiConfig::from_env()?;
    config.override_listen(args.host.as_deref(), args.port);
    if let Some(url) = args.database_url {
        config.database_url = url;
    }
    if let Some(app_env) = args.app_env.as_deref() {
        config.secure_cookies = is_production(Some(app_env));
    }

    if !config.secure_cookies {
        warn!("session cookies are not marked Secure");
    }

    // Unknown-email logins compare against the dummy hash; build it now.
    tokio::task::spawn_blocking(todo_core::auth::password::warm_up).await?;

    info!(database_url = %config.database_url, "opening database");
    let pool = todo_core::db::connect(&config.database_url, args.max_connections).await?;

    info!("running database migrations");
    todo_api::migrate(&pool).await?;

    if args.seed {
        let created = todo_core::seed::seed_demo_users(&pool).await?;
        info!(count = created.len(), "demo users seeded");
    }

    let state = todo_api::AppState {
        pool,
        config: config.clone(),
    };
    let app = todo_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
