use std::rc::Rc;

use event_finder_lib::{config::MapConfig, coordinate::Coordinate, event::Event, geocoding::Selection, interest::InterestState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    components::{event_card::EventCard, location_search::LocationSearch, map_component::MapComponent},
    location,
};

#[derive(PartialEq, Properties, Clone)]
pub struct ExploreProps {
    pub events: Rc<Vec<Event>>,
    pub interests: InterestState,
    pub on_interest_toggle: Callback<i64>,
    pub on_attended_toggle: Callback<i64>,
    pub config: Rc<MapConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    Grid,
    Map,
}

#[function_component]
pub fn Explore(props: &ExploreProps) -> Html {
    let view_mode = use_state(|| ViewMode::Grid);

    let mode_button = |mode: ViewMode, label: &'static str| {
        let view_mode = view_mode.clone();
        let active = *view_mode == mode;
        html! {
            <button
                class={classes!("btn", "btn-sm", if active { "btn-filled" } else { "btn-outline" })}
                onclick={Callback::from(move |_| view_mode.set(mode))}
            >
                {label}
            </button>
        }
    };

    html! {
        <main class="page explore">
            <div class="section-header">
                <div>
                    <h1>{"Explore Events"}</h1>
                    <p class="muted">{"Discover amazing events near you"}</p>
                </div>
                <div class="view-toggle">
                    {mode_button(ViewMode::Grid, "▦ Grid")}
                    {mode_button(ViewMode::Map, "📍 Map")}
                </div>
            </div>

            if *view_mode == ViewMode::Grid {
                <div class="event-grid">
                    { for props.events.iter().map(|event| html! {
                        <EventCard
                            key={event.id}
                            event={event.clone()}
                            status={props.interests.status(event.id)}
                            on_interest_toggle={props.on_interest_toggle.clone()}
                            on_attended_toggle={props.on_attended_toggle.clone()}
                        />
                    }) }
                </div>
            } else {
                <MapPane ..props.clone() />
            }
        </main>
    }
}

/// The map view: locates the viewer once per mount and hosts the search box
/// that drops the search pin.
#[function_component]
fn MapPane(props: &ExploreProps) -> Html {
    let viewer = use_state(|| None::<Coordinate>);
    let search_pin = use_state(|| None::<Selection>);

    {
        let viewer = viewer.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                viewer.set(Some(location::viewer_position(&config).await));
            });
        });
    }

    let on_select = {
        let search_pin = search_pin.clone();
        Callback::from(move |selection: Selection| search_pin.set(Some(selection)))
    };

    html! {
        <div class="map-pane">
            <LocationSearch
                class="map-search"
                {on_select}
                viewer={*viewer}
                config={props.config.clone()}
            />
            <MapComponent
                events={props.events.clone()}
                interests={props.interests.clone()}
                on_interest_toggle={props.on_interest_toggle.clone()}
                on_attended_toggle={props.on_attended_toggle.clone()}
                viewer={*viewer}
                search_pin={(*search_pin).clone()}
                config={props.config.clone()}
            />
        </div>
    }
}
