use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{config::MapConfig, coordinate::Coordinate, geodesy::distance_km};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("geocoder unreachable: {0}")]
    Transport(String),
    #[error("unexpected geocoder response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingQuery {
    pub text: String,
    pub bias: Option<Coordinate>,
}

impl GeocodingQuery {
    pub fn new(text: impl Into<String>, bias: Option<Coordinate>) -> Self {
        Self {
            text: text.into(),
            bias,
        }
    }

    pub fn url(&self, config: &MapConfig) -> Result<Url, GeocodingError> {
        let mut url = Url::parse(&config.geocoder_url)
            .map_err(|err| GeocodingError::Transport(format!("bad endpoint: {err}")))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", "json");
            pairs.append_pair("q", &self.text);

            match self.bias {
                Some(viewer) => {
                    let half = config.viewbox_half_width;
                    let viewbox = format!(
                        "{},{},{},{}",
                        viewer.lng - half,
                        viewer.lat + half,
                        viewer.lng + half,
                        viewer.lat - half
                    );
                    pairs.append_pair("limit", &config.biased_limit.to_string());
                    pairs.append_pair("viewbox", &viewbox);
                    pairs.append_pair("bounded", "0");
                }
                None => {
                    pairs.append_pair("limit", &config.unbiased_limit.to_string());
                }
            }
        }

        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum PlaceId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceId::Number(id) => write!(f, "{id}"),
            PlaceId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    place_id: PlaceId,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

pub fn parse_places(body: &str) -> Result<Vec<Place>, GeocodingError> {
    serde_json::from_str(body).map_err(|err| GeocodingError::Parse(err.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    pub id: String,
    pub label: String,
    pub coordinate: Coordinate,
    pub distance_km: Option<f64>,
}

impl LocationCandidate {
    fn from_place(place: Place) -> Option<Self> {
        let lat = place.lat.trim().parse::<f64>().ok()?;
        let lng = place.lon.trim().parse::<f64>().ok()?;

        Some(Self {
            id: place.place_id.to_string(),
            label: place.display_name,
            coordinate: Coordinate::try_new(lat, lng)?,
            distance_km: None,
        })
    }

    pub fn primary_label(&self) -> &str {
        self.label
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(format_distance)
    }
}

/// `350m away` below one kilometer, `2.4km away` above.
pub fn format_distance(km: f64) -> String {
    let meters = (km * 1000.).round();
    if meters < 1000. {
        format!("{meters:.0}m away")
    } else {
        format!("{km:.1}km away")
    }
}

/// Only a known viewer reorders and truncates; hits without usable
/// coordinates are dropped.
pub fn rank_candidates(
    places: Vec<Place>,
    viewer: Option<Coordinate>,
    keep: usize,
) -> Vec<LocationCandidate> {
    let mut candidates: Vec<LocationCandidate> = places
        .into_iter()
        .filter_map(LocationCandidate::from_place)
        .collect();

    if let Some(viewer) = viewer {
        for candidate in candidates.iter_mut() {
            candidate.distance_km = Some(distance_km(viewer, candidate.coordinate));
        }
        candidates.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
        });
        candidates.truncate(keep);
    }

    candidates
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Selection {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

impl From<&LocationCandidate> for Selection {
    fn from(candidate: &LocationCandidate) -> Self {
        Self {
            name: candidate.label.clone(),
            lat: candidate.coordinate.lat,
            lng: candidate.coordinate.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: u64, name: &str, lat: &str, lon: &str) -> Place {
        Place {
            place_id: PlaceId::Number(id),
            display_name: name.into(),
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    #[test]
    fn unbiased_url() {
        let config = MapConfig::default();
        let url = GeocodingQuery::new("café de flore", None).url(&config).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("nominatim.openstreetmap.org"));
        assert_eq!(
            pairs,
            vec![
                ("format".into(), "json".into()),
                ("q".into(), "café de flore".into()),
                ("limit".into(), "5".into()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn biased_url_has_viewbox() {
        let config = MapConfig::default();
        let viewer = Coordinate::new(40.0, -74.0);
        let url = GeocodingQuery::new("cafe", Some(viewer)).url(&config).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(pairs.contains(&("limit".into(), "10".into())));
        assert!(pairs.contains(&("viewbox".into(), "-74.5,40.5,-73.5,39.5".into())));
        assert!(pairs.contains(&("bounded".into(), "0".into())));
    }

    #[test]
    fn parses_nominatim_payload() {
        let body = r#"[
            {"place_id": 1234, "display_name": "Cafe Lalo, West 83rd Street, New York", "lat": "40.7864", "lon": "-73.9772", "importance": 0.3},
            {"place_id": "abc", "display_name": "Cafe", "lat": "1.0", "lon": "2.0"}
        ]"#;
        let places = parse_places(body).unwrap();
        let candidates = rank_candidates(places, None, 5);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, "1234");
        assert_eq!(candidates[0].primary_label(), "Cafe Lalo");
        assert_eq!(candidates[1].id, "abc");
        assert_eq!(candidates[1].distance_label(), None);
    }

    #[test]
    fn non_json_is_a_parse_error() {
        assert!(matches!(
            parse_places("<html>rate limited</html>"),
            Err(GeocodingError::Parse(_))
        ));
    }

    #[test]
    fn proximity_ranking() {
        let viewer = Coordinate::new(40.7589, -73.9851);
        let places = vec![
            place(1, "one", "40.76", "-73.98"),
            place(2, "two", "41.00", "-74.00"),
            place(3, "three", "40.759", "-73.986"),
        ];
        let ids: Vec<String> = rank_candidates(places, Some(viewer), 5)
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn ranking_keeps_five_and_drops_garbage() {
        let viewer = Coordinate::new(0.0, 0.0);
        let mut places: Vec<Place> = (0..10)
            .map(|i| place(i, "p", &format!("{}", i as f64 * 0.1), "0"))
            .collect();
        places.push(place(99, "bad", "north", "0"));

        let ranked = rank_candidates(places, Some(viewer), 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].id, "0");
        assert!(ranked.iter().all(|c| c.distance_km.is_some()));
    }

    #[test]
    fn distance_labels() {
        assert_eq!(format_distance(0.3504), "350m away");
        assert_eq!(format_distance(2.44), "2.4km away");
        assert_eq!(format_distance(1.0), "1.0km away");
        assert_eq!(format_distance(0.9996), "1.0km away");
        assert_eq!(format_distance(0.9994), "999m away");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ranked_output_is_sorted(
                viewer_lat in -80.0..80.0f64,
                viewer_lng in -170.0..170.0f64,
                hits in prop::collection::vec((-90.0..=90.0f64, -180.0..=180.0f64), 0..12)
            ) {
                let viewer = Coordinate::new(viewer_lat, viewer_lng);
                let places = hits
                    .iter()
                    .enumerate()
                    .map(|(i, (lat, lng))| place(i as u64, "p", &lat.to_string(), &lng.to_string()))
                    .collect();

                let ranked = rank_candidates(places, Some(viewer), 5);
                prop_assert!(ranked.len() <= 5);
                for pair in ranked.windows(2) {
                    prop_assert!(
                        distance_km(viewer, pair[0].coordinate) <= distance_km(viewer, pair[1].coordinate)
                    );
                }
            }
        }
    }
}
