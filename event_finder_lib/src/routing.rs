use std::fmt;

use geojson::{Geometry, Value};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{config::MapConfig, coordinate::Coordinate};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("routing service unavailable: {0}")]
    Unavailable(String),
    #[error("no route between the two points")]
    NoRoute,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl RouteQuery {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    pub fn url(&self, config: &MapConfig) -> Result<Url, RoutingError> {
        let raw = format!(
            "{}/route/v1/driving/{},{};{},{}",
            config.router_url, self.from.lng, self.from.lat, self.to.lng, self.to.lat
        );
        let mut url =
            Url::parse(&raw).map_err(|err| RoutingError::Unavailable(format!("bad endpoint: {err}")))?;

        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");

        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: Geometry,
    distance: f64,
    duration: f64,
}

/// A driving route in `[lat, lng]` order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<Coordinate>,
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteResult {
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            distance_km: (self.distance_m / 100.).round() / 10.,
            minutes: (self.duration_s / 60.).round() as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub minutes: u64,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km · {} min", self.distance_km, self.minutes)
    }
}

/// Parses an OSRM `route` response body. Error bodies are parsed too, since
/// OSRM reports unroutable pairs as JSON with a non-`Ok` code.
pub fn parse_route(body: &str) -> Result<RouteResult, RoutingError> {
    let response: OsrmResponse =
        serde_json::from_str(body).map_err(|err| RoutingError::Unavailable(err.to_string()))?;

    let Some(route) = response.routes.into_iter().next() else {
        return match response.code.as_deref() {
            None | Some("Ok") | Some("NoRoute") | Some("NoSegment") => Err(RoutingError::NoRoute),
            Some(code) => Err(RoutingError::Unavailable(format!(
                "{code}: {}",
                response.message.unwrap_or_default()
            ))),
        };
    };

    let Value::LineString(positions) = route.geometry.value else {
        return Err(RoutingError::Unavailable("route geometry is not a line".into()));
    };

    let path = positions
        .iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Coordinate::try_new(*lat, *lng)
                .ok_or_else(|| RoutingError::Unavailable(format!("bad position {position:?}"))),
            _ => Err(RoutingError::Unavailable(format!("bad position {position:?}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if path.is_empty() {
        return Err(RoutingError::NoRoute);
    }

    Ok(RouteResult {
        path,
        distance_m: route.distance,
        duration_s: route.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_lng_lat_order() {
        let config = MapConfig::default();
        let query = RouteQuery::new(Coordinate::new(40.7589, -73.9851), Coordinate::new(40.785091, -73.968285));
        let url = query.url(&config).unwrap();

        assert_eq!(
            url.as_str(),
            "https://router.project-osrm.org/route/v1/driving/-73.9851,40.7589;-73.968285,40.785091?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn parses_first_route_and_swaps_axes() {
        let body = r#"{
            "code": "Ok",
            "routes": [
                {
                    "geometry": {"type": "LineString", "coordinates": [[-73.9851, 40.7589], [-73.9790, 40.7700], [-73.968285, 40.785091]]},
                    "distance": 4321.0,
                    "duration": 611.0,
                    "legs": []
                },
                {
                    "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0]]},
                    "distance": 1.0,
                    "duration": 1.0
                }
            ],
            "waypoints": []
        }"#;

        let route = parse_route(body).unwrap();
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[0], Coordinate::new(40.7589, -73.9851));
        assert_eq!(route.path[2], Coordinate::new(40.785091, -73.968285));

        let summary = route.summary();
        assert_eq!(summary.distance_km, 4.3);
        assert_eq!(summary.minutes, 10);
        assert_eq!(summary.to_string(), "4.3 km · 10 min");
    }

    #[test]
    fn empty_routes_is_no_route() {
        assert_eq!(parse_route(r#"{"code": "Ok", "routes": []}"#), Err(RoutingError::NoRoute));
        assert_eq!(
            parse_route(r#"{"code": "NoRoute", "message": "Impossible route between points"}"#),
            Err(RoutingError::NoRoute)
        );
    }

    #[test]
    fn service_errors_are_unavailable() {
        assert!(matches!(
            parse_route(r#"{"code": "TooBig", "message": "Too many coordinates"}"#),
            Err(RoutingError::Unavailable(_))
        ));
        assert!(matches!(parse_route("Bad Gateway"), Err(RoutingError::Unavailable(_))));
        assert!(matches!(
            parse_route(r#"{"routes": [{"geometry": {"type": "Point", "coordinates": [1.0, 2.0]}, "distance": 1, "duration": 1}]}"#),
            Err(RoutingError::Unavailable(_))
        ));
    }
}
