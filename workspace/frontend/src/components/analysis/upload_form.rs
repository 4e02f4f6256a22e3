use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub pending: bool,
    #[prop_or_default]
    pub selected_name: Option<String>,
    pub on_select: Callback<Option<File>>,
    pub on_submit: Callback<()>,
}

#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // `accept` only filters the picker, any file may still come through
            let file = input.files().and_then(|files| files.get(0));
            on_select.emit(file);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="card bg-base-100 shadow mb-6">
            <div class="card-body flex flex-row flex-wrap items-center gap-4">
                <input
                    type="file"
                    name="file"
                    accept=".csv"
                    class="file-input file-input-bordered w-full max-w-xs"
                    onchange={on_change}
                    disabled={props.pending}
                />
                {if let Some(name) = &props.selected_name {
                    html! { <span class="text-sm text-gray-500">{name}</span> }
                } else {
                    html! {}
                }}
                <button type="submit" class="btn btn-primary" disabled={props.pending}>
                    {if props.pending {
                        html! { <span class="loading loading-spinner loading-sm"></span> }
                    } else {
                        html! { <i class="fas fa-upload"></i> }
                    }}
                    {" Upload and Analyze"}
                </button>
            </div>
        </form>
    }
}
