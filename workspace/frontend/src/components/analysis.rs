pub mod forecast_list;
pub mod plot_gallery;
pub mod upload_form;
pub mod view;

pub use view::AnalysisView;
