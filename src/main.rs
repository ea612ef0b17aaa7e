use nest_reader::{collect_reading, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    info!(project_id = %config.credentials.project_id, "configuration loaded");

    let http = reqwest::Client::new();
    let reading = collect_reading(&http, &config).await?;

    println!("Thermostat Reading: {:?}", reading);

    Ok(())
}
