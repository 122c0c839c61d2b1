use yew::prelude::*;

use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="max-w-7xl mx-auto p-6 space-y-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
