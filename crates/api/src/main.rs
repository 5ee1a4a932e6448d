use catalog_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load `.env` before logging so RUST_LOG / LOG_FORMAT from the file apply.
    let dotenv = dotenvy::dotenv();
    catalog_observability::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!("ignoring unreadable .env file: {e}");
        }
    }

    let config = ApiConfig::from_env()?;
    let app = catalog_api::app::build_default_app();
    catalog_api::server::serve(&config, app).await
}
