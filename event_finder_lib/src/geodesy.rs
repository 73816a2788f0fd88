use crate::coordinate::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine).
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = f64::sin(d_lat / 2.).powi(2)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(d_lng / 2.).powi(2);
    let c = 2. * f64::asin(f64::sqrt(h.min(1.)));

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinate::new(27.7172, 85.3240);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn known_distance() {
        // Times Square to Central Park, roughly 3.2 km
        let a = Coordinate::new(40.7589, -73.9851);
        let b = Coordinate::new(40.785091, -73.968285);
        let d = distance_km(a, b);
        assert!((d - 3.24).abs() < 0.01, "{d}");
    }

    #[test]
    fn antipodes() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn valid_coordinate() -> impl Strategy<Value = Coordinate> {
            (-90.0..=90.0, -180.0..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
        }

        proptest! {
            #[test]
            fn symmetric(a in valid_coordinate(), b in valid_coordinate()) {
                prop_assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
            }

            #[test]
            fn zero_on_self(a in valid_coordinate()) {
                prop_assert_eq!(distance_km(a, a), 0.0);
            }

            #[test]
            fn bounded_by_half_circumference(a in valid_coordinate(), b in valid_coordinate()) {
                let d = distance_km(a, b);
                prop_assert!(d >= 0.0);
                prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
            }
        }
    }
}
