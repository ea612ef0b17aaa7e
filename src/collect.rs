use crate::config::Config;
use crate::error::Result;
use crate::models::ThermostatReading;
use crate::oauth::refresh_access_token;
use crate::sdm::SdmClient;
use tracing::info;

/// Run the full refresh -> locate -> read sequence for one invocation.
///
/// The three calls are strictly sequential; the first failure short-circuits
/// the rest. Callers decide what to do with the error (the CLI exits, a
/// request handler would return it).
pub async fn collect_reading(http: &reqwest::Client, config: &Config) -> Result<ThermostatReading> {
    let access_token =
        refresh_access_token(http, &config.endpoints.oauth_url, &config.credentials).await?;

    let sdm = SdmClient::new(
        http.clone(),
        config.endpoints.sdm_url.clone(),
        config.credentials.project_id.clone(),
    );

    let device_id = sdm.find_thermostat(&access_token).await?;
    info!(device_id = %device_id, "thermostat located");

    sdm.read_thermostat(&device_id, &access_token).await
}
