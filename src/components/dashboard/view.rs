use yew::prelude::*;

use super::chart::HistoryChart;
use super::stats::Stats;
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::components::forecast::view::ForecastPanel;
use crate::components::metrics::MetricsPanel;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (state, submit_forecast) = use_dashboard();

    html! {
        <>
            {if let Some(message) = state.display_error() {
                html! { <ErrorDisplay message={message} /> }
            } else {
                html! {}
            }}

            <Stats historical={state.historical.clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Historical Price Analysis"}</h2>
                        {if state.historical.is_empty() && state.historical_error.is_none() {
                            html! { <LoadingSpinner /> }
                        } else {
                            html! { <HistoryChart observations={state.historical.clone()} /> }
                        }}
                    </div>
                </div>

                <ForecastPanel
                    forecast={state.forecast.clone()}
                    requesting={state.requesting}
                    on_submit={submit_forecast}
                />
            </div>

            <MetricsPanel metrics={state.metrics.clone()} />
        </>
    }
}
