#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::bike::PgBikeRepository;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_demo_data {
        match services::seed::seed_demo_data(&pool).await {
            Ok(added) => tracing::info!(added, "demo seed complete"),
            Err(e) => tracing::warn!(error = %e, "demo seed failed; continuing without demo data"),
        }
    }

    let state = state::AppState::new(Arc::new(PgBikeRepository::new(pool)));

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "garage listening");
    axum::serve(listener, app).await.expect("server failed");
}
