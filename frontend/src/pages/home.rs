use std::rc::Rc;

use event_finder_lib::{event::Event, interest::InterestState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::event_card::EventCard, Route};

const FEATURED: usize = 3;

#[derive(PartialEq, Properties, Clone)]
pub struct HomeProps {
    pub events: Rc<Vec<Event>>,
    pub interests: InterestState,
    pub on_interest_toggle: Callback<i64>,
    pub on_attended_toggle: Callback<i64>,
    pub on_create: Callback<()>,
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let on_create = {
        let cb = props.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main class="page home">
            <section class="hero">
                <h1>{"The people platform."}<br />{"Where interests become friendships."}</h1>
                <p>
                    {"Whatever your interest, from hiking and reading to networking and skill sharing, \
                      there are thousands of people who share it. Events are happening every day."}
                </p>
                <Link<Route> to={Route::Explore} classes="btn btn-lg btn-accent">{"Join Local event finder"}</Link<Route>>
            </section>

            <section class="featured">
                <div class="section-header">
                    <h2>{"Events near you"}</h2>
                    <Link<Route> to={Route::Explore} classes="btn btn-ghost">{"See all events"}</Link<Route>>
                </div>
                <div class="event-grid">
                    { for props.events.iter().take(FEATURED).map(|event| html! {
                        <EventCard
                            key={event.id}
                            event={event.clone()}
                            status={props.interests.status(event.id)}
                            on_interest_toggle={props.on_interest_toggle.clone()}
                            on_attended_toggle={props.on_attended_toggle.clone()}
                        />
                    }) }
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Host Your Own Event?"}</h2>
                <p>{"Share your passion with the community. Create and manage events effortlessly."}</p>
                <button class="btn btn-lg btn-filled" onclick={on_create}>{"Create Event →"}</button>
            </section>
        </main>
    }
}
