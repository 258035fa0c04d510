use std::sync::Arc;

use poem::listener::TcpListener;
use profile_directory::{
    core::{db::init_pool, image_search::build_image_search},
    init_openapi_route,
    settings::get_config,
    AppState,
};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;

    let log_level = Level::INFO;
    // Logging to File
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    tracing::info!(
        "run with host={} port={} prefix={}",
        config.host,
        config.port,
        config.prefix()
    );

    // Init Database Connection
    tracing::info!("Init Postgres connection");
    let pool = init_pool(&config)
        .await
        .inspect_err(|err| tracing::error!("{:#}", err))?;
    // Init Image Search
    let image_search = build_image_search(&config)?;
    // Init App State
    let app_state = Arc::new(AppState::new(pool, image_search));

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
