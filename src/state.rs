use std::rc::Rc;

use yew::Reducible;

use crate::api_client::forecast::ForecastResult;
use crate::api_client::historical::Observation;
use crate::api_client::metrics::MetricsCollection;

/// Canonical dashboard state, owned by the controller hook. The presentation
/// layer renders from snapshots of this and never keeps its own copy.
///
/// Load errors are kept per source so a failed request never wipes out data
/// the other request delivered; `display_error` composes the single message
/// the user sees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub historical: Vec<Observation>,
    pub metrics: Option<MetricsCollection>,
    pub forecast: Option<ForecastResult>,

    pub historical_error: Option<String>,
    pub metrics_error: Option<String>,
    pub forecast_error: Option<String>,

    /// True while the most recently issued forecast request is in flight.
    pub requesting: bool,

    /// Sequence number of the newest issued forecast request. Responses
    /// carrying an older stamp are discarded, so the latest submission
    /// always wins regardless of arrival order.
    latest_request: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    HistoricalLoaded(Vec<Observation>),
    HistoricalFailed(String),
    MetricsLoaded(MetricsCollection),
    MetricsFailed(String),
    ForecastStarted(u64),
    ForecastLoaded(u64, ForecastResult),
    ForecastFailed(u64, String),
}

impl DashboardState {
    fn apply(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::HistoricalLoaded(observations) => {
                self.historical = observations;
                self.historical_error = None;
            }
            DashboardAction::HistoricalFailed(message) => {
                self.historical_error = Some(message);
            }
            DashboardAction::MetricsLoaded(collection) => {
                self.metrics = Some(collection);
                self.metrics_error = None;
            }
            DashboardAction::MetricsFailed(message) => {
                self.metrics_error = Some(message);
            }
            DashboardAction::ForecastStarted(seq) => {
                self.latest_request = self.latest_request.max(seq);
                self.requesting = true;
            }
            DashboardAction::ForecastLoaded(seq, result) => {
                if seq != self.latest_request {
                    log::debug!("Discarding stale forecast response #{}", seq);
                } else {
                    self.forecast = Some(result);
                    self.forecast_error = None;
                    self.requesting = false;
                }
            }
            DashboardAction::ForecastFailed(seq, message) => {
                if seq != self.latest_request {
                    log::debug!("Discarding stale forecast failure #{}", seq);
                } else {
                    self.forecast_error = Some(message);
                    self.requesting = false;
                }
            }
        }

        self
    }

    /// The single human-readable message shown in the alert bar, composed
    /// from whichever error slots are set. The most recent user-triggered
    /// failure takes precedence over load failures.
    pub fn display_error(&self) -> Option<String> {
        if let Some(e) = &self.forecast_error {
            return Some(format!("Forecast failed: {}", e));
        }

        match (&self.historical_error, &self.metrics_error) {
            (None, None) => None,
            (Some(e), None) => Some(format!("Failed to load price history: {}", e)),
            (None, Some(e)) => Some(format!("Failed to load model metrics: {}", e)),
            (Some(e), Some(_)) => Some(format!("Failed to load dashboard data: {}", e)),
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: DashboardAction) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(day: u32, price: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            price,
            volume: None,
            change: None,
        }
    }

    fn forecast(values: &[f64]) -> ForecastResult {
        ForecastResult {
            dates: values
                .iter()
                .enumerate()
                .map(|(i, _)| NaiveDate::from_ymd_opt(2024, 2, 1 + i as u32).unwrap())
                .collect(),
            values: values.to_vec(),
            confidence_interval: None,
        }
    }

    #[test]
    fn partial_initial_load_keeps_what_succeeded() {
        let metrics: MetricsCollection =
            serde_json::from_str(r#"{"ARIMA": {"RMSE": 2.5}}"#).unwrap();

        let state = DashboardState::default()
            .apply(DashboardAction::MetricsLoaded(metrics))
            .apply(DashboardAction::HistoricalFailed("connection refused".into()));

        assert!(state.historical.is_empty());
        assert!(state.metrics.is_some());
        assert!(state.display_error().unwrap().contains("price history"));
    }

    #[test]
    fn reload_replaces_the_series_wholesale() {
        let state = DashboardState::default()
            .apply(DashboardAction::HistoricalLoaded(vec![observation(1, 80.0)]))
            .apply(DashboardAction::HistoricalLoaded(vec![
                observation(1, 80.0),
                observation(2, 81.5),
            ]));

        assert_eq!(state.historical.len(), 2);
        assert_eq!(state.historical_error, None);
    }

    #[test]
    fn forecast_success_replaces_result_and_clears_error() {
        let state = DashboardState::default()
            .apply(DashboardAction::ForecastStarted(1))
            .apply(DashboardAction::ForecastFailed(1, "HTTP error: 500".into()))
            .apply(DashboardAction::ForecastStarted(2))
            .apply(DashboardAction::ForecastLoaded(2, forecast(&[82.1, 82.4])));

        assert_eq!(state.forecast.unwrap().values, vec![82.1, 82.4]);
        assert_eq!(state.forecast_error, None);
        assert!(!state.requesting);
    }

    #[test]
    fn forecast_failure_preserves_previous_result() {
        let state = DashboardState::default()
            .apply(DashboardAction::ForecastStarted(1))
            .apply(DashboardAction::ForecastLoaded(1, forecast(&[82.1])))
            .apply(DashboardAction::ForecastStarted(2))
            .apply(DashboardAction::ForecastFailed(2, "GARCH has no forecast endpoint".into()));

        assert_eq!(state.forecast.unwrap().values, vec![82.1]);
        assert!(state.display_error().unwrap().contains("Forecast failed"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let state = DashboardState::default()
            .apply(DashboardAction::ForecastStarted(1))
            .apply(DashboardAction::ForecastStarted(2))
            .apply(DashboardAction::ForecastLoaded(2, forecast(&[90.0])))
            .apply(DashboardAction::ForecastLoaded(1, forecast(&[10.0])));

        assert_eq!(state.forecast.unwrap().values, vec![90.0]);
    }

    #[test]
    fn stale_failure_does_not_mask_newer_success() {
        let state = DashboardState::default()
            .apply(DashboardAction::ForecastStarted(1))
            .apply(DashboardAction::ForecastStarted(2))
            .apply(DashboardAction::ForecastLoaded(2, forecast(&[90.0])))
            .apply(DashboardAction::ForecastFailed(1, "timed out".into()));

        assert_eq!(state.forecast_error, None);
        assert!(!state.requesting);
    }

    #[test]
    fn requesting_flag_tracks_latest_submission() {
        let state = DashboardState::default().apply(DashboardAction::ForecastStarted(1));
        assert!(state.requesting);

        let state = state.apply(DashboardAction::ForecastStarted(2));
        assert!(state.requesting);

        // The older response coming back does not end the newer request.
        let state = state.apply(DashboardAction::ForecastLoaded(1, forecast(&[10.0])));
        assert!(state.requesting);

        let state = state.apply(DashboardAction::ForecastLoaded(2, forecast(&[90.0])));
        assert!(!state.requesting);
    }

    #[test]
    fn load_errors_compose_into_one_message() {
        let state = DashboardState::default()
            .apply(DashboardAction::HistoricalFailed("connection refused".into()))
            .apply(DashboardAction::MetricsFailed("connection refused".into()));

        assert!(state.display_error().unwrap().contains("dashboard data"));
    }
}
