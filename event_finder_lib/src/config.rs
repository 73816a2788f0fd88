use crate::coordinate::Coordinate;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const OSRM_URL: &str = "https://router.project-osrm.org";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Times Square, New York.
pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(40.7589, -73.9851);

/// Overridable at build time through `EVENT_FINDER_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub geocoder_url: String,
    pub router_url: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub tile_max_zoom: f64,

    pub initial_zoom: f64,
    pub search_pin_zoom: f64,
    pub fit_max_zoom: f64,
    pub fit_padding: f64,
    pub route_fit_padding: f64,

    pub debounce_ms: u32,
    pub min_query_chars: usize,
    pub unbiased_limit: usize,
    pub biased_limit: usize,
    pub ranked_keep: usize,
    pub viewbox_half_width: f64,

    pub geolocation_timeout_ms: u32,
    pub fallback: Coordinate,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            geocoder_url: option_env!("EVENT_FINDER_GEOCODER_URL")
                .unwrap_or(NOMINATIM_URL)
                .to_owned(),
            router_url: option_env!("EVENT_FINDER_ROUTER_URL")
                .unwrap_or(OSRM_URL)
                .trim_end_matches('/')
                .to_owned(),
            tile_url: OSM_TILE_URL.to_owned(),
            tile_attribution: OSM_ATTRIBUTION.to_owned(),
            tile_max_zoom: 19.,

            initial_zoom: 12.,
            search_pin_zoom: 14.,
            fit_max_zoom: 13.,
            fit_padding: 50.,
            route_fit_padding: 80.,

            debounce_ms: 500,
            min_query_chars: 3,
            unbiased_limit: 5,
            biased_limit: 10,
            ranked_keep: 5,
            viewbox_half_width: 0.5,

            geolocation_timeout_ms: 10_000,
            fallback: fallback_from(
                option_env!("EVENT_FINDER_FALLBACK_LAT"),
                option_env!("EVENT_FINDER_FALLBACK_LNG"),
            ),
        }
    }
}

pub fn fallback_from(lat: Option<&str>, lng: Option<&str>) -> Coordinate {
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return DEFAULT_FALLBACK;
    };

    match (lat.trim().parse::<f64>(), lng.trim().parse::<f64>()) {
        (Ok(lat), Ok(lng)) => Coordinate::try_new(lat, lng).unwrap_or(DEFAULT_FALLBACK),
        _ => DEFAULT_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_overrides() {
        assert_eq!(
            fallback_from(Some("27.7172"), Some(" 85.3240")),
            Coordinate::new(27.7172, 85.3240)
        );
        assert_eq!(fallback_from(Some("27.7172"), None), DEFAULT_FALLBACK);
        assert_eq!(fallback_from(Some("95"), Some("85")), DEFAULT_FALLBACK);
        assert_eq!(fallback_from(Some("x"), Some("85")), DEFAULT_FALLBACK);
    }
}
