use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <main class="page not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-filled">{"Return to Home"}</Link<Route>>
        </main>
    }
}
