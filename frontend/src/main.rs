use std::rc::Rc;

use components::{create_event_form::CreateEventForm, navigation::Navigation};
use event_finder_lib::{config::MapConfig, event::Event, interest::InterestState};
use gloo_console::info;
use pages::{explore::Explore, home::Home, not_found::NotFound};
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

mod api;
mod components;
mod geocoder;
mod location;
mod pages;
mod seed;
mod util;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/explore")]
    Explore,
    #[not_found]
    #[at("/404")]
    NotFound,
}

enum MainMsg {
    ToggleInterested(i64),
    ToggleAttended(i64),
    OpenCreate,
    CloseCreate,
    EventCreated(Event),
}

struct Model {
    events: Rc<Vec<Event>>,
    interests: InterestState,
    create_open: bool,
    config: Rc<MapConfig>,
}

impl Model {
    fn next_id(&self) -> i64 {
        self.events.iter().map(|event| event.id).max().unwrap_or(0) + 1
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = MapConfig::default();
        info!(format!(
            "Starting with geocoder {} and router {}",
            config.geocoder_url, config.router_url
        ));

        Self {
            events: Rc::new(seed::events()),
            interests: InterestState::default(),
            create_open: false,
            config: Rc::new(config),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::ToggleInterested(id) => self.interests.toggle_interested(id),
            MainMsg::ToggleAttended(id) => self.interests.toggle_attended(id),
            MainMsg::OpenCreate => self.create_open = true,
            MainMsg::CloseCreate => self.create_open = false,
            MainMsg::EventCreated(event) => {
                info!(format!("Added event {}", event.id));
                Rc::make_mut(&mut self.events).push(event);
                self.create_open = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_interest_toggle = link.callback(MainMsg::ToggleInterested);
        let on_attended_toggle = link.callback(MainMsg::ToggleAttended);
        let on_create = link.callback(|()| MainMsg::OpenCreate);

        let events = self.events.clone();
        let interests = self.interests.clone();
        let config = self.config.clone();
        let home_create = on_create.clone();

        html! {
            <BrowserRouter>
                <Navigation {on_create} />
                <Switch<Route> render={move |route| match route {
                    Route::Home => html! {
                        <Home
                            events={events.clone()}
                            interests={interests.clone()}
                            on_interest_toggle={on_interest_toggle.clone()}
                            on_attended_toggle={on_attended_toggle.clone()}
                            on_create={home_create.clone()}
                        />
                    },
                    Route::Explore => html! {
                        <Explore
                            events={events.clone()}
                            interests={interests.clone()}
                            on_interest_toggle={on_interest_toggle.clone()}
                            on_attended_toggle={on_attended_toggle.clone()}
                            config={config.clone()}
                        />
                    },
                    Route::NotFound => html! { <NotFound /> },
                }} />
                if self.create_open {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h2>{"Create New Event"}</h2>
                            <CreateEventForm
                                next_id={self.next_id()}
                                on_created={link.callback(MainMsg::EventCreated)}
                                on_cancel={link.callback(|()| MainMsg::CloseCreate)}
                                config={self.config.clone()}
                            />
                        </div>
                    </div>
                }
            </BrowserRouter>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
