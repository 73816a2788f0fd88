use std::rc::Rc;

use event_finder_lib::{
    config::MapConfig,
    event::{Event, NewEvent},
    geocoding::Selection,
};
use gloo_console::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::location_search::LocationSearch;

#[derive(PartialEq, Properties, Clone)]
pub struct CreateEventProps {
    pub next_id: i64,
    pub on_created: Callback<Event>,
    pub on_cancel: Callback<()>,
    pub config: Rc<MapConfig>,
}

fn set_field(draft: &mut NewEvent, name: &str, value: String) {
    match name {
        "title" => draft.title = value,
        "date" => draft.date = value,
        "time" => draft.time = value,
        "location" => draft.location = value,
        "description" => draft.description = value,
        "image" => draft.image = value,
        "lat" => draft.lat = value,
        "lng" => draft.lng = value,
        _ => warn!(format!("Unknown form field {name}")),
    }
}

#[function_component]
pub fn CreateEventForm(props: &CreateEventProps) -> Html {
    let draft = use_state(NewEvent::default);
    let error = use_state(|| None::<String>);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set_field(&mut next, &input.name(), input.value());
            draft.set(next);
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = area.value();
            draft.set(next);
        })
    };

    // A picked place pins the event; the typed location label wins if present.
    let on_pick = {
        let draft = draft.clone();
        Callback::from(move |selection: Selection| {
            let mut next = (*draft).clone();
            if next.location.trim().is_empty() {
                next.location = selection.name.clone();
            }
            next.lat = format!("{:.6}", selection.lat);
            next.lng = format!("{:.6}", selection.lng);
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let next_id = props.next_id;
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate(next_id) {
                Ok(event) => {
                    info!(format!("Created event {} \"{}\"", event.id, event.title));
                    error.set(None);
                    draft.set(NewEvent::default());
                    on_created.emit(event);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let field = |name: &'static str, label: &'static str, kind: &'static str, value: &str, placeholder: &'static str| {
        html! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    class="input"
                    {name}
                    type={kind}
                    step={(kind == "number").then_some("any")}
                    value={value.to_owned()}
                    {placeholder}
                    oninput={on_input.clone()}
                />
            </label>
        }
    };

    html! {
        <form class="create-event-form" onsubmit={on_submit}>
            {field("title", "Event Title *", "text", &draft.title, "Summer Music Festival")}
            <div class="form-row">
                {field("date", "Date *", "date", &draft.date, "")}
                {field("time", "Time *", "time", &draft.time, "")}
            </div>
            {field("location", "Location *", "text", &draft.location, "Central Park, New York")}
            <div class="form-field">
                <span>{"Find on map"}</span>
                <LocationSearch
                    on_select={on_pick}
                    config={props.config.clone()}
                    placeholder="Search a place to fill the coordinates..."
                />
            </div>
            <div class="form-row">
                {field("lat", "Latitude *", "number", &draft.lat, "40.785091")}
                {field("lng", "Longitude *", "number", &draft.lng, "-73.968285")}
            </div>
            <label class="form-field">
                <span>{"Description"}</span>
                <textarea
                    class="input"
                    name="description"
                    rows="4"
                    value={draft.description.clone()}
                    placeholder="Tell people what your event is about..."
                    oninput={on_description}
                />
            </label>
            {field("image", "Image URL", "url", &draft.image, "https://...")}
            if let Some(message) = &*error {
                <p class="form-error">{message.clone()}</p>
            }
            <div class="form-actions">
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-filled">{"Create Event"}</button>
            </div>
        </form>
    }
}
