use event_finder_lib::{
    coordinate::Coordinate,
    event::{placeable, Event},
    interest::InterestState,
    lifecycle::{Arena, Release},
    markup::{event_icon_html, viewer_icon_html},
};
use gloo_console::{error, info, warn};
use gloo_utils::document;
use leaflet::{DivIcon, DivIconOptions, Map, Marker, MarkerOptions, Point, Popup, PopupOptions, Tooltip, TooltipOptions};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use yew::{AppHandle, Callback};

use crate::{
    components::popup::{PopupCard, PopupProps},
    util::lat_lng,
};

/// One event on the map: the marker, the app rendering its popup and the
/// click handler registered on it.
pub struct EventMarker {
    marker: Marker,
    popup: AppHandle<PopupCard>,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl Release for EventMarker {
    fn release(self) {
        self.marker.remove();
        self.popup.destroy();
    }
}

pub struct MarkerInput<'a> {
    pub events: &'a [Event],
    pub interests: &'a InterestState,
    pub viewer: Option<Coordinate>,
    pub on_interest_toggle: &'a Callback<i64>,
    pub on_attended_toggle: &'a Callback<i64>,
    pub on_route: &'a Callback<Coordinate>,
}

/// Replaces every marker in `markers` with one per placeable event.
pub fn rebuild(map: &Map, markers: &mut Arena<EventMarker>, input: &MarkerInput) {
    markers.clear();

    let placement = placeable(input.events);
    for err in &placement.skipped {
        warn!(format!("Skipping event marker: {err}"));
    }

    for (event, position) in placement.placed {
        if let Some(marker) = event_marker(map, event, position, input) {
            markers.push(marker);
        }
    }

    info!(format!("Placed {} of {} event markers", markers.len(), input.events.len()));
}

fn event_marker(map: &Map, event: &Event, position: Coordinate, input: &MarkerInput) -> Option<EventMarker> {
    let root = match document().create_element("div") {
        Ok(root) => root,
        Err(err) => {
            error!("Could not create popup root", err);
            return None;
        }
    };
    root.set_class_name("event-popup");

    let icon_opts = DivIconOptions::new();
    icon_opts.set_html(event_icon_html(&event.image, &event.title));
    icon_opts.set_class_name("event-marker".into());
    icon_opts.set_icon_size(Point::new(48., 56.));
    icon_opts.set_icon_anchor(Point::new(24., 56.));
    icon_opts.set_popup_anchor(Point::new(0., -52.));

    let opts = MarkerOptions::new();
    opts.set_icon(DivIcon::new(&icon_opts).into());
    let marker = Marker::new_with_options(&lat_lng(position), &opts);

    let popup_opts = PopupOptions::default();
    popup_opts.set_max_width(280.);
    let popup = Popup::new(&popup_opts, None);
    popup.set_content(&JsValue::from(root.clone()));
    marker.bind_popup(&popup);

    let app = yew::Renderer::<PopupCard>::with_root_and_props(
        root,
        PopupProps {
            event: event.clone(),
            status: input.interests.status(event.id),
            position,
            can_route: input.viewer.is_some(),
            on_interest_toggle: input.on_interest_toggle.clone(),
            on_attended_toggle: input.on_attended_toggle.clone(),
            on_route: input.on_route.clone(),
        },
    )
    .render();

    // Clicking a marker both opens its popup and routes to it.
    let on_click = {
        let on_route = input.on_route.clone();
        let can_route = input.viewer.is_some();
        Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            if can_route {
                on_route.emit(position);
            }
        })
    };
    marker.on("click", on_click.as_ref().unchecked_ref());
    marker.add_to(map);

    Some(EventMarker {
        marker,
        popup: app,
        _on_click: on_click,
    })
}

/// The "you are here" marker.
pub fn viewer_marker(position: Coordinate) -> Marker {
    let icon_opts = DivIconOptions::new();
    icon_opts.set_html(viewer_icon_html().into());
    icon_opts.set_class_name("viewer-marker".into());
    icon_opts.set_icon_size(Point::new(22., 22.));
    icon_opts.set_icon_anchor(Point::new(11., 11.));

    let opts = MarkerOptions::new();
    opts.set_icon(DivIcon::new(&icon_opts).into());
    opts.set_z_index_offset(1000.);
    let marker = Marker::new_with_options(&lat_lng(position), &opts);

    let tooltip = Tooltip::new(&TooltipOptions::default(), None);
    tooltip.set_content(&"You are here".into());
    marker.bind_tooltip(&tooltip);

    marker
}
