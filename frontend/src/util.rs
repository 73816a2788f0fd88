use event_finder_lib::coordinate::{Bounds, Coordinate};
use gloo_console::error;
use leaflet::{LatLng, LatLngBounds, Map};
use web_sys::js_sys::{Array, Object, Reflect};

pub fn lat_lng(coordinate: Coordinate) -> LatLng {
    LatLng::new(coordinate.lat, coordinate.lng)
}

pub fn lat_lng_bounds(bounds: Bounds) -> LatLngBounds {
    LatLngBounds::new(&lat_lng(bounds.south_west), &lat_lng(bounds.north_east))
}

/// `map.fitBounds(bounds, { padding: [p, p], maxZoom })`
pub fn fit_bounds(map: &Map, bounds: Bounds, padding: f64, max_zoom: Option<f64>) {
    let options = Object::new();
    let padding = Array::of2(&padding.into(), &padding.into());
    if let Err(err) = Reflect::set(&options, &"padding".into(), &padding) {
        error!("Could not set fitBounds padding", err);
    }
    if let Some(max_zoom) = max_zoom {
        if let Err(err) = Reflect::set(&options, &"maxZoom".into(), &max_zoom.into()) {
            error!("Could not set fitBounds maxZoom", err);
        }
    }

    map.fit_bounds_with_options(&lat_lng_bounds(bounds), &options);
}
