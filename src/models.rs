use serde::Deserialize;

/// Response from the OAuth token endpoint for a refresh_token grant.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

/// Response from the device list endpoint. The `devices` key is absent when
/// the project has no devices at all.
#[derive(Debug, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    /// Full resource path, e.g. "enterprises/{project}/devices/{id}".
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
}

/// Response from the device detail endpoint. Only the traits the reading
/// needs are modeled; unknown traits are ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct DeviceResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub traits: DeviceTraits,
}

/// The six SDM trait namespaces the reading is built from. A device that does
/// not report a trait yields the zero value for its fields.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceTraits {
    #[serde(rename = "sdm.devices.traits.Humidity", default)]
    pub humidity: HumidityTrait,
    #[serde(rename = "sdm.devices.traits.Fan", default)]
    pub fan: FanTrait,
    #[serde(rename = "sdm.devices.traits.ThermostatMode", default)]
    pub thermostat_mode: ThermostatModeTrait,
    #[serde(rename = "sdm.devices.traits.ThermostatHvac", default)]
    pub hvac: HvacTrait,
    #[serde(rename = "sdm.devices.traits.ThermostatTemperatureSetpoint", default)]
    pub setpoint: SetpointTrait,
    #[serde(rename = "sdm.devices.traits.Temperature", default)]
    pub temperature: TemperatureTrait,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumidityTrait {
    #[serde(default)]
    pub ambient_humidity_percent: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanTrait {
    #[serde(default)]
    pub timer_mode: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatModeTrait {
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HvacTrait {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetpointTrait {
    #[serde(default)]
    pub heat_celsius: f64,
    #[serde(default)]
    pub cool_celsius: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureTrait {
    #[serde(default)]
    pub ambient_temperature_celsius: f64,
}

/// Point-in-time snapshot of a thermostat's state. `mode` and
/// `thermostat_mode` both carry the ThermostatMode trait value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermostatReading {
    pub mode: String,
    pub temperature_celsius: f64,
    pub humidity_percent: i64,
    pub heat_setpoint_celsius: f64,
    pub cool_setpoint_celsius: f64,
    pub thermostat_mode: String,
    pub fan_timer_mode: String,
    pub hvac_status: String,
}

impl From<DeviceTraits> for ThermostatReading {
    fn from(traits: DeviceTraits) -> Self {
        ThermostatReading {
            mode: traits.thermostat_mode.mode.clone(),
            temperature_celsius: traits.temperature.ambient_temperature_celsius,
            humidity_percent: traits.humidity.ambient_humidity_percent,
            heat_setpoint_celsius: traits.setpoint.heat_celsius,
            cool_setpoint_celsius: traits.setpoint.cool_celsius,
            thermostat_mode: traits.thermostat_mode.mode,
            fan_timer_mode: traits.fan.timer_mode,
            hvac_status: traits.hvac.status,
        }
    }
}
