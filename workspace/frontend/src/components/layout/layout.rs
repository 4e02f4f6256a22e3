use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    /// Shown in the navbar so users can tell which service they are talking to
    pub service_origin: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} service_origin={props.service_origin.clone()} />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
