use localboost_common::ForecastEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastListProps {
    pub entries: Vec<ForecastEntry>,
}

/// Forecast points as `date: value` lines, in server order
#[function_component(ForecastList)]
pub fn forecast_list(props: &ForecastListProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h2 class="card-title">{"Forecast Data"}</h2>
                <ul class="list-disc list-inside font-mono text-sm">
                    {for props.entries.iter().enumerate().map(|(idx, entry)| html! {
                        <li key={idx}>{entry.to_string()}</li>
                    })}
                </ul>
            </div>
        </div>
    }
}
