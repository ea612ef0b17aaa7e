use crate::error::{AppError, Result};
use std::env;

const DEFAULT_OAUTH_URL: &str = "https://www.googleapis.com/oauth2/v4/token";
const DEFAULT_SDM_URL: &str = "https://smartdevicemanagement.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: EndpointsConfig,
}

/// Credentials for the SDM project. All four are opaque strings supplied by
/// the Google device access console.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub project_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct EndpointsConfig {
    /// OAuth token endpoint, without query parameters.
    pub oauth_url: String,
    /// SDM API base, up to and including the version segment.
    pub sdm_url: String,
}

impl Config {
    /// Load configuration from environment variables. `NEST_OAUTH_URL` and
    /// `NEST_SDM_URL` override the Google endpoints.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials {
            project_id: required_var("PROJECT_ID")?,
            client_id: required_var("CLIENT_ID")?,
            client_secret: required_var("CLIENT_SECRET")?,
            refresh_token: required_var("REFRESH_TOKEN")?,
        };

        let endpoints = EndpointsConfig {
            oauth_url: env::var("NEST_OAUTH_URL").unwrap_or_else(|_| DEFAULT_OAUTH_URL.into()),
            sdm_url: env::var("NEST_SDM_URL").unwrap_or_else(|_| DEFAULT_SDM_URL.into()),
        };

        Ok(Config {
            credentials,
            endpoints,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(val) if !val.is_empty() => Ok(val),
        Ok(_) => Err(AppError::Config(format!("{} must not be empty", name))),
        Err(_) => Err(AppError::Config(format!("{} must be set", name))),
    }
}
