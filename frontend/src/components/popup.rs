use event_finder_lib::{coordinate::Coordinate, event::Event, interest::InterestStatus};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct PopupProps {
    pub event: Event,
    pub status: Option<InterestStatus>,
    pub position: Coordinate,
    /// Show Route is only offered once the viewer is known.
    pub can_route: bool,
    pub on_interest_toggle: Callback<i64>,
    pub on_attended_toggle: Callback<i64>,
    pub on_route: Callback<Coordinate>,
}

/// Content of an event marker's popup. Rendered as its own app into a node
/// owned by the marker, see `marker_layer`.
#[function_component]
pub fn PopupCard(props: &PopupProps) -> Html {
    let event = &props.event;
    let id = event.id;

    let interested = props.status == Some(InterestStatus::Interested);
    let attended = props.status == Some(InterestStatus::Attended);

    let on_interest = {
        let cb = props.on_interest_toggle.clone();
        Callback::from(move |_| cb.emit(id))
    };
    let on_attended = {
        let cb = props.on_attended_toggle.clone();
        Callback::from(move |_| cb.emit(id))
    };
    let on_route = {
        let cb = props.on_route.clone();
        let position = props.position;
        Callback::from(move |_| cb.emit(position))
    };

    html! {
        <div class="popup-card">
            <img class="popup-image" src={event.image.clone()} alt={event.title.clone()} />
            <h3 class="popup-title">{event.title.clone()}</h3>
            <div class="popup-meta">
                <span class="icon">{"🗓"}</span>
                <span>{event.long_schedule()}</span>
            </div>
            <div class="popup-meta">
                <span class="icon">{"📍"}</span>
                <span>{event.location.clone()}</span>
            </div>
            <p class="popup-description">{event.description.clone()}</p>
            <div class="popup-actions">
                <button
                    class={classes!("btn", "btn-sm", if interested { "btn-filled" } else { "btn-outline" })}
                    onclick={on_interest}
                >
                    {if interested { "♥ Interested" } else { "♡ Interested" }}
                </button>
                <button
                    class={classes!("btn", "btn-sm", if attended { "btn-filled" } else { "btn-outline" })}
                    onclick={on_attended}
                >
                    {"✓ Attended"}
                </button>
            </div>
            if props.can_route {
                <button class="btn btn-sm btn-route" onclick={on_route}>{"Show Route"}</button>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::NaiveDate;
    use gloo_timers::future::TimeoutFuture;
    use gloo_utils::document;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{Element, HtmlElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn event(id: i64) -> Event {
        Event {
            id,
            title: "Yoga in the Park".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            time: "08:00".to_owned(),
            location: "Riverside Park".to_owned(),
            description: "Start your day with mindful movement.".to_owned(),
            image: "https://example.com/yoga.jpg".to_owned(),
            lat: 40.80208,
            lng: -73.971249,
            attendees: 67,
            interested: 234,
            organizer: None,
        }
    }

    fn mount(props: PopupProps) -> Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<PopupCard>::with_root_and_props(root.clone(), props).render();
        root
    }

    fn button(root: &Element, selector: &str) -> HtmlElement {
        root.query_selector(selector)
            .unwrap()
            .expect("button rendered")
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn interested_emits_the_event_id_once() {
        let toggled = Rc::new(RefCell::new(Vec::new()));
        let on_interest_toggle = {
            let toggled = toggled.clone();
            Callback::from(move |id: i64| toggled.borrow_mut().push(id))
        };

        let root = mount(PopupProps {
            event: event(7),
            status: None,
            position: Coordinate::new(40.80208, -73.971249),
            can_route: true,
            on_interest_toggle,
            on_attended_toggle: Callback::noop(),
            on_route: Callback::noop(),
        });
        TimeoutFuture::new(0).await;

        let interested = button(&root, ".popup-actions button");
        assert_eq!(interested.text_content().as_deref(), Some("♡ Interested"));
        interested.click();
        TimeoutFuture::new(0).await;

        assert_eq!(*toggled.borrow(), vec![7]);
        // The card only reports the click; the owner decides the new status.
        let interested = button(&root, ".popup-actions button");
        assert!(interested.class_name().contains("btn-outline"));
        assert_eq!(interested.text_content().as_deref(), Some("♡ Interested"));
    }

    #[wasm_bindgen_test]
    async fn route_button_needs_a_viewer() {
        let root = mount(PopupProps {
            event: event(3),
            status: Some(InterestStatus::Interested),
            position: Coordinate::new(40.80208, -73.971249),
            can_route: false,
            on_interest_toggle: Callback::noop(),
            on_attended_toggle: Callback::noop(),
            on_route: Callback::noop(),
        });
        TimeoutFuture::new(0).await;

        assert!(root.query_selector(".btn-route").unwrap().is_none());
        let interested = button(&root, ".popup-actions button");
        assert!(interested.class_name().contains("btn-filled"));
    }
}
