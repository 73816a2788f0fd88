use event_finder_lib::{
    config::MapConfig,
    geocoding::{self, GeocodingError, GeocodingQuery, LocationCandidate},
    routing::{self, RouteQuery, RouteResult, RoutingError},
};
use gloo_console::info;
use gloo_net::http::Request;

/// GETs `url` and returns the body, together with whether the status was 2xx.
pub async fn make_request(url: &str) -> Result<(bool, String), gloo_net::Error> {
    let response = Request::get(url).send().await?;
    let ok = response.ok();
    let body = response.text().await?;

    Ok((ok, body))
}

pub async fn search_locations(
    query: &GeocodingQuery,
    config: &MapConfig,
) -> Result<Vec<LocationCandidate>, GeocodingError> {
    let url = query.url(config)?;
    info!(format!("Geocoding \"{}\"", query.text));

    let (ok, body) = make_request(url.as_str())
        .await
        .map_err(|err| GeocodingError::Transport(err.to_string()))?;

    if !ok {
        return Err(GeocodingError::Transport(format!("status not ok: {body}")));
    }

    let places = geocoding::parse_places(&body)?;
    Ok(geocoding::rank_candidates(places, query.bias, config.ranked_keep))
}

pub async fn fetch_route(query: RouteQuery, config: &MapConfig) -> Result<RouteResult, RoutingError> {
    let url = query.url(config)?;
    info!(format!("Routing {url}"));

    // OSRM answers unroutable pairs with a JSON error body, so the status is
    // left to the parser.
    let (_, body) = make_request(url.as_str())
        .await
        .map_err(|err| RoutingError::Unavailable(err.to_string()))?;

    routing::parse_route(&body)
}
