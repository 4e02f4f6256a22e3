use yew::prelude::*;

use super::forecast_list::ForecastList;
use super::plot_gallery::PlotGallery;
use super::upload_form::UploadForm;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::use_analysis;

#[derive(Properties, PartialEq)]
pub struct AnalysisViewProps {
    pub origin: localboost_common::ServiceOrigin,
}

#[function_component(AnalysisView)]
pub fn analysis_view(props: &AnalysisViewProps) -> Html {
    let analysis = use_analysis();
    let state = &analysis.state;

    let selected_name = state.selected_file().map(|file| file.name());

    html! {
        <>
            {if let Some(message) = state.error_message() {
                html! { <ErrorDisplay message={message} /> }
            } else {
                html! {}
            }}

            <UploadForm
                pending={state.is_pending()}
                selected_name={selected_name}
                on_select={analysis.on_select.clone()}
                on_submit={analysis.on_submit.clone()}
            />

            {if state.is_pending() {
                html! { <Loading text={Some("Analyzing...".to_string())} /> }
            } else {
                html! {}
            }}

            {if let Some(result) = state.result() {
                html! {
                    <>
                        <ForecastList entries={result.forecast.clone()} />
                        <PlotGallery result={result.clone()} origin={props.origin.clone()} />
                    </>
                }
            } else {
                html! {}
            }}
        </>
    }
}
