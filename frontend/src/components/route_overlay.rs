use std::rc::Rc;

use event_finder_lib::{
    config::MapConfig,
    coordinate::{Bounds, Coordinate},
    lifecycle::{Latest, Release, Slot, Ticket},
    markup::route_failure_html,
    routing::{RouteQuery, RouteResult, RouteSummary, RoutingError},
};
use gloo_console::{error, info};
use leaflet::{Map, Polyline, PolylineOptions, Popup, PopupOptions};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Array;
use yew::Callback;

use crate::{
    api,
    util::{fit_bounds, lat_lng},
};

const ROUTE_COLOR: &str = "#2563eb";

/// What the banner above the map reports about the last route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteInfo {
    Summary(RouteSummary),
    Failed,
}

/// Outcome of one routing request, tagged with the ticket it was issued under.
pub struct RouteResolution {
    ticket: Ticket,
    to: Coordinate,
    result: Result<RouteResult, RoutingError>,
}

struct RouteLine(Polyline);

impl Release for RouteLine {
    fn release(self) {
        self.0.remove();
    }
}

struct FailurePopup(Popup);

impl Release for FailurePopup {
    fn release(self) {
        self.0.remove();
    }
}

/// At most one route polyline and one failure popup, owned by the map they
/// were drawn on. Only the most recently requested route is ever drawn.
#[derive(Default)]
pub struct RouteOverlay {
    line: Slot<RouteLine>,
    failure: Slot<FailurePopup>,
    latest: Latest,
}

impl RouteOverlay {
    /// Removes whatever is drawn and voids requests still in flight.
    pub fn clear(&mut self) {
        self.latest.invalidate();
        self.line.clear();
        self.failure.clear();
    }

    /// Starts routing `from` -> `to`. The previous route disappears right away;
    /// the outcome arrives through `on_resolved` and must be passed to `resolve`.
    pub fn draw(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        config: Rc<MapConfig>,
        on_resolved: Callback<RouteResolution>,
    ) {
        self.clear();
        let ticket = self.latest.issue();

        spawn_local(async move {
            let result = api::fetch_route(RouteQuery::new(from, to), &config).await;
            on_resolved.emit(RouteResolution { ticket, to, result });
        });
    }

    /// Draws a finished request onto `map`. Returns `None` for stale results.
    pub fn resolve(&mut self, map: &Map, resolution: RouteResolution, config: &MapConfig) -> Option<RouteInfo> {
        if !self.latest.is_current(resolution.ticket) {
            info!("Dropping superseded route");
            return None;
        }

        let route = match resolution.result {
            Ok(route) => route,
            Err(err) => {
                error!(format!("Routing failed: {err}"));
                self.show_failure(map, resolution.to);
                return Some(RouteInfo::Failed);
            }
        };

        let Some(bounds) = Bounds::around(&route.path) else {
            error!("Route has no points");
            self.show_failure(map, resolution.to);
            return Some(RouteInfo::Failed);
        };

        let line = route_polyline(&route);
        line.add_to(map);
        self.line.replace(RouteLine(line));
        fit_bounds(map, bounds, config.route_fit_padding, None);

        let summary = route.summary();
        info!(format!("Route drawn: {summary}"));
        Some(RouteInfo::Summary(summary))
    }

    fn show_failure(&mut self, map: &Map, at: Coordinate) {
        let popup = Popup::new(&PopupOptions::default(), None);
        popup.set_lat_lng(&lat_lng(at));
        popup.set_content(&route_failure_html().into());
        popup.open_on(map);
        self.failure.replace(FailurePopup(popup));
    }
}

fn route_polyline(route: &RouteResult) -> Polyline {
    let opts = PolylineOptions::new();
    opts.set_color(ROUTE_COLOR.into());
    opts.set_weight(5.);
    opts.set_opacity(0.8);
    opts.set_dash_array("8, 12".into());
    opts.set_line_cap("round".into());
    opts.set_smooth_factor(1.5);

    let points = route.path.iter().map(|&point| lat_lng(point));
    Polyline::new_with_options(&Array::from_iter(points), &opts)
}
