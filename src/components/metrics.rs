use yew::prelude::*;

use crate::api_client::metrics::MetricsCollection;

fn format_metric(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "--".to_string())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: Option<MetricsCollection>,
}

#[function_component(MetricsPanel)]
pub fn metrics_panel(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Model Performance Metrics"}</h2>
                {match &props.metrics {
                    Some(collection) => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                            { for collection.iter().map(|(model, metrics)| html! {
                                <div class="border rounded-lg p-4">
                                    <h3 class="font-semibold mb-2">{ model.label() }</h3>
                                    <div class="space-y-1 text-sm">
                                        <div class="flex justify-between">
                                            <span class="text-gray-500">{"RMSE"}</span>
                                            <span class="font-medium">{ format_metric(metrics.rmse, 2) }</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="text-gray-500">{"MAE"}</span>
                                            <span class="font-medium">{ format_metric(metrics.mae, 2) }</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="text-gray-500">{"MAPE"}</span>
                                            <span class="font-medium">{ format_metric(metrics.mape, 2) }</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="text-gray-500">{"R²"}</span>
                                            <span class="font-medium">{ format_metric(metrics.r2, 3) }</span>
                                        </div>
                                        <div class="text-xs text-gray-500 mt-2">
                                            { format!("Execution: {}ms", format_metric(metrics.execution_time_ms, 0)) }
                                        </div>
                                    </div>
                                </div>
                            })}
                        </div>
                    },
                    None => html! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { for (0..4).map(|i| html! {
                                <div key={i} class="skeleton h-24 rounded-lg"></div>
                            })}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
