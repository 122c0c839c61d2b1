use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api_client::{self, ApiError};

/// The models offered by the dashboard. Only ARIMA and LSTM have live
/// backend routes; the remaining models are selectable but unrouted, and
/// requesting them fails before any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ForecastModel {
    #[serde(rename = "ARIMA")]
    Arima,
    #[serde(rename = "LSTM")]
    Lstm,
    #[serde(rename = "GARCH")]
    Garch,
    #[serde(rename = "VAR")]
    Var,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 4] = [Self::Arima, Self::Lstm, Self::Garch, Self::Var];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Arima => "ARIMA",
            Self::Lstm => "LSTM",
            Self::Garch => "GARCH",
            Self::Var => "VAR",
        }
    }

    /// Backend prediction route for this model, if one is wired up.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Arima => Some("/predict/arima"),
            Self::Lstm => Some("/predict/lstm"),
            Self::Garch | Self::Var => None,
        }
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize)]
struct ForecastRequest {
    steps: u32,
}

/// Model-generated future series. `dates`, `values` and (when present) the
/// confidence bounds are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,

    #[serde(
        rename = "confidenceInterval",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence_interval: Option<Vec<(f64, f64)>>,
}

impl ForecastResult {
    fn check_alignment(&self) -> Result<(), String> {
        if self.dates.len() != self.values.len() {
            return Err(format!(
                "forecast has {} dates but {} values",
                self.dates.len(),
                self.values.len()
            ));
        }

        if let Some(bounds) = &self.confidence_interval {
            if bounds.len() != self.dates.len() {
                return Err(format!(
                    "forecast has {} dates but {} confidence bounds",
                    self.dates.len(),
                    bounds.len()
                ));
            }
        }

        Ok(())
    }
}

/// Request a forecast of `horizon` future periods from the given model.
pub async fn request_forecast(
    model: ForecastModel,
    horizon: u32,
) -> Result<ForecastResult, ApiError> {
    let Some(endpoint) = model.endpoint() else {
        log::warn!("Forecast requested for {} which has no backend route", model);
        return Err(ApiError::UnsupportedModel(model));
    };

    log::debug!("Requesting {} forecast over {} periods", model, horizon);

    let result: ForecastResult = api_client::post(endpoint, &ForecastRequest { steps: horizon }).await?;

    result.check_alignment().map_err(|e| {
        log::error!("{} forecast response misaligned: {}", model, e);
        ApiError::Decode(e)
    })?;

    log::info!("{} forecast returned {} points", model, result.values.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arima_and_lstm_are_routed() {
        assert_eq!(ForecastModel::Arima.endpoint(), Some("/predict/arima"));
        assert_eq!(ForecastModel::Lstm.endpoint(), Some("/predict/lstm"));
        assert_eq!(ForecastModel::Garch.endpoint(), None);
        assert_eq!(ForecastModel::Var.endpoint(), None);
    }

    #[test]
    fn decodes_aligned_payload() {
        let payload = r#"{
            "dates": ["2024-02-01", "2024-02-02", "2024-02-03", "2024-02-04", "2024-02-05"],
            "values": [82.1, 82.4, 82.0, 81.7, 82.9]
        }"#;

        let forecast: ForecastResult = serde_json::from_str(payload).unwrap();
        assert_eq!(forecast.dates.len(), 5);
        assert_eq!(forecast.values.len(), 5);
        assert_eq!(forecast.confidence_interval, None);
        assert!(forecast.check_alignment().is_ok());
    }

    #[test]
    fn decodes_confidence_bounds_as_pairs() {
        let payload = r#"{
            "dates": ["2024-02-01", "2024-02-02"],
            "values": [82.1, 82.4],
            "confidenceInterval": [[80.0, 84.2], [79.8, 85.0]]
        }"#;

        let forecast: ForecastResult = serde_json::from_str(payload).unwrap();
        let bounds = forecast.confidence_interval.as_ref().unwrap();
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0], (80.0, 84.2));
        assert!(forecast.check_alignment().is_ok());
    }

    #[test]
    fn misaligned_lengths_fail_validation() {
        let mismatched_values = ForecastResult {
            dates: vec![NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()],
            values: vec![82.1, 82.4],
            confidence_interval: None,
        };
        assert!(mismatched_values.check_alignment().is_err());

        let mismatched_bounds = ForecastResult {
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            ],
            values: vec![82.1, 82.4],
            confidence_interval: Some(vec![(80.0, 84.2)]),
        };
        assert!(mismatched_bounds.check_alignment().is_err());
    }
}
