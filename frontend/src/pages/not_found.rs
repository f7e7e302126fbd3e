use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main>
            <h2>{"404 - Page not found"}</h2>
            <p>{"The page you are looking for does not exist."}</p>
        </main>
    }
}
