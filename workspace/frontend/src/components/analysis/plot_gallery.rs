use localboost_common::{AnalysisResult, ServiceOrigin};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlotGalleryProps {
    pub result: AnalysisResult,
    pub origin: ServiceOrigin,
}

/// The four server-rendered plots, loaded straight from the service origin
#[function_component(PlotGallery)]
pub fn plot_gallery(props: &PlotGalleryProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Plots"}</h2>
                {for props.result.plots().map(|(kind, path)| {
                    let src = props.origin.resolve(path);
                    log::trace!("{} plot at {}", kind.title(), src);
                    html! {
                        <div key={kind.title()} class="mb-6">
                            <h3 class="font-semibold mb-2">{kind.title()}</h3>
                            <img src={src} alt={kind.title()} class="w-4/5" />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
