use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::forecast::ForecastModel;

const MAX_HORIZON: u32 = 90;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub requesting: bool,
    pub on_submit: Callback<(ForecastModel, u32)>,
}

#[function_component(ForecastForm)]
pub fn forecast_form(props: &Props) -> Html {
    let model = use_state(|| ForecastModel::Arima);
    let horizon = use_state(|| 30u32);

    let on_horizon_change = {
        let horizon = horizon.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value().parse::<u32>().unwrap_or(1).clamp(1, MAX_HORIZON);
                horizon.set(value);
            }
        })
    };

    let on_run = {
        let model = model.clone();
        let horizon = horizon.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit((*model, *horizon)))
    };

    html! {
        <div class="space-y-4 mb-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="label">
                        <span class="label-text">{"Forecast Horizon (days)"}</span>
                    </label>
                    <input
                        type="number"
                        class="input input-bordered w-full"
                        min="1"
                        max={MAX_HORIZON.to_string()}
                        value={horizon.to_string()}
                        onchange={on_horizon_change}
                    />
                </div>
                <div>
                    <label class="label">
                        <span class="label-text">{"Model Selection"}</span>
                    </label>
                    <div class="join">
                        { for ForecastModel::ALL.iter().map(|&candidate| {
                            let onclick = {
                                let model = model.clone();
                                Callback::from(move |_| model.set(candidate))
                            };
                            let class = if *model == candidate {
                                "btn join-item btn-active"
                            } else {
                                "btn join-item"
                            };
                            html! {
                                <button class={class} onclick={onclick}>{ candidate.label() }</button>
                            }
                        })}
                    </div>
                </div>
            </div>
            <button class="btn btn-primary" onclick={on_run} disabled={props.requesting}>
                { if props.requesting { "Processing..." } else { "Run Forecast" } }
            </button>
        </div>
    }
}
