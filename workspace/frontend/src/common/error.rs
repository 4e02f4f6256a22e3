use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Inline alert for the most recent failure
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div role="alert" class="alert alert-error mb-6">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <span id="analysis-error">{&props.message}</span>
        </div>
    }
}
