use std::{net::TcpListener, time::Duration};

use actix_web::web;
use anyhow::Context;
use leads::{telemetry, AdminCredential};
use sqlx::sqlite::SqlitePoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测初始化
    let subscriber = telemetry::get_subscriber("leads", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = leads::config::config().context("failed to read config.yaml.")?;
    let pool = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.database.connect_options());
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to migrate database.")?;

    let admin = AdminCredential::from_config(&config.admin)?;
    let session_key = config.session.key()?;
    let listener = TcpListener::bind(config.web.server_address())
        .with_context(|| format!("failed to bind {}.", config.web.server_address()))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    // 构造web Arc
    let pool = web::Data::new(pool);
    let admin = web::Data::new(admin);

    leads::run(listener, pool, admin, session_key)?.await?;

    Ok(())
}
