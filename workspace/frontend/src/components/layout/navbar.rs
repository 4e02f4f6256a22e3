use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub service_origin: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none px-4">
                <span class="badge badge-ghost gap-2" title="Analysis service">
                    <i class="fas fa-server"></i>
                    { &props.service_origin }
                </span>
            </div>
        </div>
    }
}
