use crate::config::Credentials;
use crate::error::{AppError, Result};
use crate::models::TokenResponse;
use tracing::debug;

/// Exchange the long-lived refresh token for a short-lived access token.
///
/// The token endpoint takes the credentials as query parameters and expects
/// an empty JSON body. The returned token is used as a bearer token for the
/// SDM calls that follow; expiry and scope are not tracked since every
/// invocation starts with a fresh exchange.
pub async fn refresh_access_token(
    http: &reqwest::Client,
    oauth_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let response = http
        .post(oauth_url)
        .query(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .json(&serde_json::json!({}))
        .send()
        .await
        .map_err(|e| AppError::TokenRefresh(format!("request failed: {}", e)))?;

    let response = response
        .error_for_status()
        .map_err(|e| AppError::TokenRefresh(format!("token endpoint returned error: {}", e)))?;

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AppError::TokenRefresh(format!("could not decode token response: {}", e)))?;

    debug!("access token refreshed");
    Ok(token.access_token)
}
