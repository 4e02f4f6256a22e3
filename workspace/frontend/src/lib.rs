use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod common;
pub mod settings;

use components::analysis::AnalysisView;
use components::layout::layout::Layout;

pub const APP_TITLE: &str = "LocalBoost Analysis";

#[function_component(App)]
pub fn app() -> Html {
    let settings = settings::get_settings();
    let origin = settings.service_origin;
    let origin_label = origin.to_string();
    log::trace!("Rendering analysis page against {}", origin_label);

    html! {
        <Layout title={APP_TITLE} service_origin={origin_label}>
            <AnalysisView origin={origin} />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== LocalBoost Analysis Client Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Analyze endpoint: {}", settings.analyze_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
