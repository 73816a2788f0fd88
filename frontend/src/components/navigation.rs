use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(PartialEq, Properties, Clone)]
pub struct NavigationProps {
    pub on_create: Callback<()>,
}

#[function_component]
pub fn Navigation(props: &NavigationProps) -> Html {
    let route = use_route::<Route>();
    let link_class = |target: Route| {
        classes!("btn", "btn-sm", if route.as_ref() == Some(&target) { "btn-filled" } else { "btn-ghost" })
    };

    let on_create = {
        let cb = props.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <nav class="navigation">
            <Link<Route> to={Route::Home} classes="brand">
                <span class="brand-mark">{"📍"}</span>
                <span class="brand-name">{"EventHub"}</span>
            </Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>{"Home"}</Link<Route>>
                <Link<Route> to={Route::Explore} classes={link_class(Route::Explore)}>{"Explore"}</Link<Route>>
                <button class="btn btn-sm btn-accent" onclick={on_create}>{"+ Create Event"}</button>
            </div>
        </nav>
    }
}
