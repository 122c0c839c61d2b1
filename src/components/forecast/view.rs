use yew::prelude::*;

use super::chart::ForecastChart;
use super::form::ForecastForm;
use crate::api_client::forecast::{ForecastModel, ForecastResult};
use crate::common::loading::LoadingSpinner;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: Option<ForecastResult>,
    pub requesting: bool,
    pub on_submit: Callback<(ForecastModel, u32)>,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Price Forecast"}</h2>
                <ForecastForm requesting={props.requesting} on_submit={props.on_submit.clone()} />
                {match &props.forecast {
                    // A request in flight does not blank out the previous
                    // forecast; it stays visible until replaced.
                    Some(forecast) => html! { <ForecastChart forecast={forecast.clone()} /> },
                    None if props.requesting => html! { <LoadingSpinner /> },
                    None => html! {
                        <div class="text-center py-8 text-gray-500">
                            <p>{"No forecast yet. Pick a model and horizon to run one."}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
