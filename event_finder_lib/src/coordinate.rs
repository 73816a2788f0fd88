use serde::{Deserialize, Serialize};

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `None` unless both components are finite and in range.
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        let coordinate = Self::new(lat, lng);
        coordinate.is_valid().then_some(coordinate)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Axis aligned box spanned by a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;

        let bounds = points.fold(
            Self {
                south_west: first,
                north_east: first,
            },
            |mut acc, p| {
                acc.south_west.lat = acc.south_west.lat.min(p.lat);
                acc.south_west.lng = acc.south_west.lng.min(p.lng);
                acc.north_east.lat = acc.north_east.lat.max(p.lat);
                acc.north_east.lng = acc.north_east.lng.max(p.lng);
                acc
            },
        );

        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::try_new(90.0, 180.0).is_some());
        assert!(Coordinate::try_new(-90.0, -180.0).is_some());
        assert!(Coordinate::try_new(90.1, 0.0).is_none());
        assert!(Coordinate::try_new(0.0, -180.5).is_none());
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let points = [
            Coordinate::new(40.7589, -73.9851),
            Coordinate::new(40.802080, -73.971249),
            Coordinate::new(40.748817, -73.985428),
        ];
        let bounds = Bounds::around(&points).unwrap();

        assert_eq!(bounds.south_west, Coordinate::new(40.748817, -73.985428));
        assert_eq!(bounds.north_east, Coordinate::new(40.802080, -73.971249));
    }

    #[test]
    fn bounds_of_nothing() {
        assert_eq!(Bounds::around(&[]), None);
    }
}
