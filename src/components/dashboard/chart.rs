use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::analysis::moving_average;
use crate::api_client::historical::Observation;

const MA_WINDOW: usize = 30;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub observations: Vec<Observation>,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let observations = props.observations.clone();

    use_effect_with((chart_ref.clone(), observations), move |(chart_ref, observations)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let dates: Vec<String> = observations.iter().map(|o| o.date.to_string()).collect();
            let prices: Vec<f64> = observations.iter().map(|o| o.price).collect();
            // The warm-up prefix serializes as nulls, which Plotly renders
            // as a gap in the overlay.
            let overlay = moving_average(observations, MA_WINDOW);

            let traces = serde_json::json!([
                {
                    "x": dates,
                    "y": prices,
                    "type": "scatter",
                    "mode": "lines",
                    "fill": "tozeroy",
                    "name": "Daily Price",
                    "line": {"color": "#3b82f6", "shape": "spline"}
                },
                {
                    "x": dates,
                    "y": overlay,
                    "type": "scatter",
                    "mode": "lines",
                    "name": "30-day MA",
                    "line": {"color": "#fb923c", "dash": "dash"}
                }
            ]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false},
                "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "Price (USD)"}},
                "showlegend": true,
                "legend": {"orientation": "h", "y": -0.2}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if !div_id.is_empty() {
                newPlot(
                    &div_id,
                    serde_wasm_bindgen::to_value(&traces).unwrap(),
                    serde_wasm_bindgen::to_value(&layout).unwrap(),
                    serde_wasm_bindgen::to_value(&config).unwrap(),
                );
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-price-history" class="chart-container" style="height: 350px;"></div>
    }
}
