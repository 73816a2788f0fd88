use std::rc::Rc;

use event_finder_lib::{
    config::MapConfig,
    coordinate::{Bounds, Coordinate},
    event::{placeable, Event},
    geocoding::Selection,
    interest::InterestState,
    lifecycle::{Episode, Release, Scene},
    markup::escape_html,
};
use gloo_console::{error, info};
use gloo_utils::document;
use leaflet::{Map, MapOptions, Marker, TileLayer, TileLayerOptions, Tooltip, TooltipOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;

use crate::{
    components::{
        marker_layer::{self, EventMarker, MarkerInput},
        route_overlay::{RouteInfo, RouteOverlay, RouteResolution},
    },
    util::{fit_bounds, lat_lng},
};

pub struct MapComponent {
    container: Option<HtmlElement>,
    episode: Episode,
    live: Option<LiveMap>,
    route: RouteOverlay,
    route_info: Option<RouteInfo>,
}

struct MapHandle(Map);

impl Release for MapHandle {
    fn release(self) {
        self.0.remove();
    }
}

struct ViewerMarker(Marker);

impl Release for ViewerMarker {
    fn release(self) {
        self.0.remove();
    }
}

struct SearchPin(Marker);

impl Release for SearchPin {
    fn release(self) {
        self.0.remove();
    }
}

type LiveMap = Scene<MapHandle, ViewerMarker, EventMarker, SearchPin>;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub events: Rc<Vec<Event>>,
    pub interests: InterestState,
    pub on_interest_toggle: Callback<i64>,
    pub on_attended_toggle: Callback<i64>,
    /// `None` until the viewer has been located.
    pub viewer: Option<Coordinate>,
    #[prop_or_default]
    pub search_pin: Option<Selection>,
    pub config: Rc<MapConfig>,
}

pub enum Msg {
    ShowRoute(Coordinate),
    RouteResolved(RouteResolution),
    ClearRoute,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        match &self.container {
            Some(container) => {
                let node: &Node = container;
                Html::VRef(node.clone())
            }
            None => html! { <div class="map map-error">{"The map could not be created."}</div> },
        }
    }

    fn go_live(&mut self, ctx: &Context<Self>) {
        let Some(container) = &self.container else {
            return;
        };
        let Some(viewer) = self.episode.should_go_live() else {
            return;
        };
        if !self.episode.go_live() {
            return;
        }

        let props = ctx.props();
        let config = &props.config;

        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_view(&lat_lng(viewer), config.initial_zoom);
        add_tile_layer(&map, config);

        let viewer_marker = marker_layer::viewer_marker(viewer);
        viewer_marker.add_to(&map);

        let mut live = LiveMap::new(MapHandle(map), ViewerMarker(viewer_marker));

        rebuild_markers(ctx, &mut live, viewer);
        fit_to_events(&live, &props.events, viewer, config);
        if let Some(selection) = &props.search_pin {
            place_search_pin(&mut live, selection, config);
        }

        info!(format!("Map episode {} is live", self.episode.episodes()));
        self.live = Some(live);
    }
}

impl Component for MapComponent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let container = document()
            .create_element("div")
            .ok()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        match &container {
            Some(container) => container.set_class_name("map"),
            None => error!("Could not create the map container"),
        }

        let mut episode = Episode::default();
        if let Some(viewer) = ctx.props().viewer {
            episode.locate(viewer);
        }

        Self {
            container,
            episode,
            live: None,
            route: RouteOverlay::default(),
            route_info: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.container.is_some() {
            self.episode.mount();
        }
        self.go_live(ctx);
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();

        if let Some(viewer) = props.viewer {
            self.episode.locate(viewer);
        }

        let (Some(live), Some(viewer)) = (&mut self.live, self.episode.position()) else {
            return true;
        };

        let markers_stale = props.events != old_props.events
            || props.interests != old_props.interests
            || props.on_interest_toggle != old_props.on_interest_toggle
            || props.on_attended_toggle != old_props.on_attended_toggle;
        if markers_stale {
            rebuild_markers(ctx, live, viewer);
        }

        if props.search_pin != old_props.search_pin {
            match &props.search_pin {
                Some(selection) => place_search_pin(live, selection, &props.config),
                None => live.pin.clear(),
            }
        }

        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let config = &ctx.props().config;

        match msg {
            Msg::ShowRoute(to) => {
                let (Some(_), Some(viewer)) = (&self.live, self.episode.position()) else {
                    return false;
                };
                self.route_info = None;
                self.route.draw(viewer, to, config.clone(), ctx.link().callback(Msg::RouteResolved));
                true
            }
            Msg::RouteResolved(resolution) => {
                let Some(live) = &self.live else {
                    return false;
                };
                match self.route.resolve(&live.map.0, resolution, config) {
                    Some(info) => {
                        self.route_info = Some(info);
                        true
                    }
                    None => false,
                }
            }
            Msg::ClearRoute => {
                self.route.clear();
                self.route_info = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.link().callback(|_| Msg::ClearRoute);

        html! {
            <div class="map-wrapper">
                {self.render_map()}
                if self.live.is_none() && self.container.is_some() {
                    <div class="map-loading">{"Finding your location..."}</div>
                }
                if let Some(info) = &self.route_info {
                    <div class={classes!("route-info", matches!(info, RouteInfo::Failed).then_some("route-info-failed"))}>
                        <span>{route_info_text(info)}</span>
                        <button class="route-info-close" onclick={on_close}>{"×"}</button>
                    </div>
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        let live = self.live.take();
        let route = &mut self.route;
        self.episode.teardown(|| {
            route.clear();
            if let Some(live) = live {
                live.release();
            }
        });
        info!("Map torn down");
    }
}

fn route_info_text(info: &RouteInfo) -> String {
    match info {
        RouteInfo::Summary(summary) => format!("Route: {summary}"),
        RouteInfo::Failed => "Route unavailable".to_string(),
    }
}

fn rebuild_markers(ctx: &Context<MapComponent>, live: &mut LiveMap, viewer: Coordinate) {
    let props = ctx.props();
    let on_route = ctx.link().callback(Msg::ShowRoute);

    marker_layer::rebuild(
        &live.map.0,
        &mut live.markers,
        &MarkerInput {
            events: &props.events,
            interests: &props.interests,
            viewer: Some(viewer),
            on_interest_toggle: &props.on_interest_toggle,
            on_attended_toggle: &props.on_attended_toggle,
            on_route: &on_route,
        },
    );
}

/// Frames the viewer together with every placeable event.
fn fit_to_events(live: &LiveMap, events: &[Event], viewer: Coordinate, config: &MapConfig) {
    let placement = placeable(events);
    if placement.placed.is_empty() {
        return;
    }

    let positions = placement.placed.iter().map(|(_, position)| position);
    if let Some(bounds) = Bounds::around(positions.chain([&viewer])) {
        fit_bounds(&live.map.0, bounds, config.fit_padding, Some(config.fit_max_zoom));
    }
}

fn place_search_pin(live: &mut LiveMap, selection: &Selection, config: &MapConfig) {
    let position = selection.coordinate();
    if !position.is_valid() {
        error!(format!("Ignoring search pin outside the map: {}", selection.name));
        return;
    }

    let marker = Marker::new(&lat_lng(position));
    let tooltip = Tooltip::new(&TooltipOptions::default(), None);
    tooltip.set_content(&escape_html(&selection.name).into());
    marker.bind_tooltip(&tooltip);
    marker.add_to(&live.map.0);

    live.pin.replace(SearchPin(marker));
    live.map.0.set_view(&lat_lng(position), config.search_pin_zoom);
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_max_zoom(config.tile_max_zoom);
    opts.set_attribution(config.tile_attribution.clone());
    opts.set_update_when_idle(true);
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}
