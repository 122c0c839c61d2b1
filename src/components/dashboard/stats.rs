use yew::prelude::*;

use crate::api_client::historical::Observation;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub historical: Vec<Observation>,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let latest = props.historical.last();

    let price = latest
        .map(|o| format!("{:.2} USD", o.price))
        .unwrap_or_else(|| "--".to_string());

    let change = latest.and_then(|o| o.change);
    let change_text = change
        .map(|c| format!("{:+.2}%", c))
        .unwrap_or_else(|| "--".to_string());
    let change_class = if change.unwrap_or(0.0) >= 0.0 {
        "text-success"
    } else {
        "text-error"
    };

    let volume = latest
        .and_then(|o| o.volume)
        .map(|v| format!("{} bbl", v))
        .unwrap_or_else(|| "--".to_string());

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Current Price"}</div>
                    <div class="stat-value text-primary">{price}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"24h Change"}</div>
                    <div class={classes!("stat-value", change_class)}>{change_text}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Daily Volume"}</div>
                    <div class="stat-value">{volume}</div>
                </div>
            </div>
        </div>
    }
}
