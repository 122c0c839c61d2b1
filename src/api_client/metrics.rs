use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api_client::forecast::ForecastModel;
use crate::api_client::{self, ApiError};

/// Accuracy and performance summary for one model. The backend omits fields
/// for models it has not evaluated, so every slot is optional and the UI
/// renders missing values as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(rename = "RMSE", default)]
    pub rmse: Option<f64>,

    #[serde(rename = "MAE", default)]
    pub mae: Option<f64>,

    #[serde(rename = "MAPE", default)]
    pub mape: Option<f64>,

    #[serde(rename = "R2", default)]
    pub r2: Option<f64>,

    /// Inference wall time in milliseconds.
    #[serde(rename = "executionTime", default)]
    pub execution_time_ms: Option<f64>,
}

/// Per-model metrics, keyed by model. Ordered so rendering is deterministic.
pub type MetricsCollection = BTreeMap<ForecastModel, ModelMetrics>;

/// Fetch precomputed accuracy metrics for every model the backend knows.
pub async fn fetch_metrics() -> Result<MetricsCollection, ApiError> {
    log::trace!("Fetching model accuracy metrics");

    let result = api_client::get::<MetricsCollection>("/metrics").await;

    match &result {
        Ok(collection) => log::info!("Fetched metrics for {} models", collection.len()),
        Err(e) => log::error!("Failed to fetch model metrics: {}", e),
    }

    result
}
