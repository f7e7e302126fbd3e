//! Single-page admin console for moderating ema wish-board entries.

mod api;
mod components;
mod hooks;
mod pages;
mod router;
mod session;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
