use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api_client::forecast::ForecastResult;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: ForecastResult,
}

fn to_js_object(serialized: &str) -> JsValue {
    js_sys::JSON::parse(serialized).unwrap()
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let forecast = props.forecast.clone();

    use_effect_with((chart_ref.clone(), forecast), move |(chart_ref, forecast)| {
        if let Some(element) = chart_ref.cast::<HtmlElement>() {
            let dates: Vec<String> = forecast.dates.iter().map(|d| d.to_string()).collect();

            let data_js = js_sys::Array::new();

            if let Some(bounds) = &forecast.confidence_interval {
                let lows: Vec<f64> = bounds.iter().map(|b| b.0).collect();
                let highs: Vec<f64> = bounds.iter().map(|b| b.1).collect();

                for (name, series) in [("Lower Bound", lows), ("Upper Bound", highs)] {
                    let trace = Scatter::new(dates.clone(), series)
                        .mode(Mode::Lines)
                        .name(name)
                        .line(
                            Line::new()
                                .color("rgba(34, 197, 94, 0.4)")
                                .width(1.0)
                                .dash(DashType::Dot),
                        );
                    data_js.push(&to_js_object(&serde_json::to_string(&trace).unwrap()));
                }
            }

            let trace = Scatter::new(dates, forecast.values.clone())
                .mode(Mode::Lines)
                .name("Forecasted Price")
                .line(
                    Line::new()
                        .color("rgb(34, 197, 94)")
                        .width(2.0)
                        .dash(DashType::Dash),
                );
            data_js.push(&to_js_object(&serde_json::to_string(&trace).unwrap()));

            let layout = Layout::new()
                .x_axis(Axis::new().title(Title::with_text("Date")))
                .y_axis(Axis::new().title(Title::with_text("Predicted Price (USD)")))
                .height(300);
            let layout_js = to_js_object(&serde_json::to_string(&layout).unwrap());

            let div_id = element.id();
            if !div_id.is_empty() {
                newPlot(&div_id, data_js.into(), layout_js);
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-forecast" style="width:100%; height:300px;"></div>
    }
}
