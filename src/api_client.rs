pub mod forecast;
pub mod historical;
pub mod metrics;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings;

use self::forecast::ForecastModel;

// The backend base address comes from settings.
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Failure modes of the analytics backend boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Transport(String),

    /// Response did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The selected model has no backend route.
    #[error("{0} has no forecast endpoint")]
    UnsupportedModel(ForecastModel),
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - request failed: {}", endpoint, e);
        ApiError::Transport(e.to_string())
    })?;

    if !response.ok() {
        log::error!("GET {} - HTTP error: {}", endpoint, response.status());
        return Err(ApiError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    log::trace!("GET {} - response received, parsing JSON", endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("GET {} - success", endpoint);
    Ok(data)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - failed to serialize request: {}", endpoint, e);
            ApiError::Transport(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - request failed: {}", endpoint, e);
            ApiError::Transport(e.to_string())
        })?;

    if !response.ok() {
        log::error!("POST {} - HTTP error: {}", endpoint, response.status());
        return Err(ApiError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    log::trace!("POST {} - response received, parsing JSON", endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("POST {} - failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })?;

    log::info!("POST {} - success", endpoint);
    Ok(data)
}
