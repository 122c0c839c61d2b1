use yew::prelude::*;

use crate::api_client::forecast::{self, ForecastModel};
use crate::api_client::{historical, metrics};
use crate::state::{DashboardAction, DashboardState};

/// Dashboard controller hook. Owns the canonical [`DashboardState`], runs
/// the initial load on mount and hands out the forecast submission callback.
///
/// The two initial requests are spawned independently, so both are in
/// flight before either resolves and a failure on one side never discards
/// what the other side delivered.
#[hook]
pub fn use_dashboard() -> (UseReducerHandle<DashboardState>, Callback<(ForecastModel, u32)>) {
    let state = use_reducer(DashboardState::default);
    let request_seq = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            log::debug!("Dashboard mounted, starting initial load");

            {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match historical::fetch_historical().await {
                        Ok(observations) => {
                            state.dispatch(DashboardAction::HistoricalLoaded(observations))
                        }
                        Err(e) => state.dispatch(DashboardAction::HistoricalFailed(e.to_string())),
                    }
                });
            }

            {
                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match metrics::fetch_metrics().await {
                        Ok(collection) => {
                            state.dispatch(DashboardAction::MetricsLoaded(collection))
                        }
                        Err(e) => state.dispatch(DashboardAction::MetricsFailed(e.to_string())),
                    }
                });
            }

            || ()
        });
    }

    let submit_forecast = {
        let state = state.clone();
        use_callback((), move |(model, horizon): (ForecastModel, u32), _| {
            // Stamp the request so a slow older response cannot overwrite a
            // newer one; the reducer discards anything but the latest stamp.
            let seq = {
                let mut counter = request_seq.borrow_mut();
                *counter += 1;
                *counter
            };

            log::debug!(
                "Submitting {} forecast over {} periods (request #{})",
                model,
                horizon,
                seq
            );
            state.dispatch(DashboardAction::ForecastStarted(seq));

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match forecast::request_forecast(model, horizon).await {
                    Ok(result) => state.dispatch(DashboardAction::ForecastLoaded(seq, result)),
                    Err(e) => state.dispatch(DashboardAction::ForecastFailed(seq, e.to_string())),
                }
            });
        })
    };

    (state, submit_forecast)
}
