use crate::error::{AppError, Result};
use crate::models::{Device, DeviceResponse, DevicesResponse, ThermostatReading};
use tracing::{debug, info};

const THERMOSTAT_TYPE: &str = "sdm.devices.types.THERMOSTAT";

/// Client for the Smart Device Management device endpoints of one project.
#[derive(Clone)]
pub struct SdmClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
}

impl SdmClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            project_id: project_id.into(),
        }
    }

    /// List the project's devices and return the id of its thermostat.
    ///
    /// The project must contain exactly one device of the thermostat type;
    /// any other count is an error reporting what was found. Devices of
    /// other types are ignored.
    pub async fn find_thermostat(&self, access_token: &str) -> Result<String> {
        let url = format!("{}/enterprises/{}/devices", self.base_url, self.project_id);
        let response: DevicesResponse = self.get_json(&url, access_token).await?;

        let mut device_ids = thermostat_device_ids(&response.devices);
        for id in &device_ids {
            debug!(device_id = %id, "found thermostat");
        }

        if device_ids.len() != 1 {
            return Err(AppError::DeviceLookup(format!(
                "expected one thermostat, found {}",
                device_ids.len()
            )));
        }
        Ok(device_ids.remove(0))
    }

    /// Fetch the device resource and flatten its traits into a reading.
    pub async fn read_thermostat(
        &self,
        device_id: &str,
        access_token: &str,
    ) -> Result<ThermostatReading> {
        let url = format!(
            "{}/enterprises/{}/devices/{}",
            self.base_url, self.project_id, device_id
        );
        let response: DeviceResponse = self.get_json(&url, access_token).await?;

        info!(device = %response.name, device_type = %response.device_type, "device fetched");
        Ok(ThermostatReading::from(response.traits))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header("Content-Type", "application/json")
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?;

        // Decode separately from the fetch so an undecodable body surfaces
        // as a Json error rather than a transport one.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Ids of all thermostat-typed devices, in list order.
fn thermostat_device_ids(devices: &[Device]) -> Vec<String> {
    devices
        .iter()
        .filter(|d| d.device_type == THERMOSTAT_TYPE)
        .map(|d| device_id_from_path(&d.name).to_string())
        .collect()
}

/// Trailing segment of a device resource path,
/// e.g. "enterprises/p/devices/abc" -> "abc".
fn device_id_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
