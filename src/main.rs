use url_shortener::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(config.env);

    tracing::info!(env = %config.env, "starting url-shortener");
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = ?e, "server failed");
        return Err(e);
    }

    Ok(())
}
