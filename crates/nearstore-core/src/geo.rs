//! Great-circle distance on a spherical Earth approximation.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Miles per kilometer.
const KM_TO_MI: f64 = 0.621_371;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Produced transiently by the geocoder, a position provider, or a store
/// record; carries no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two coordinates, in miles.
///
/// Degrees in, radians internally. Returns a finite nonnegative number for
/// finite inputs; non-finite inputs are outside the contract.
#[must_use]
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * KM_TO_MI
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(39.828_3, -98.579_5);
        assert!(distance_miles(p, p).abs() < EPS);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(40.712_8, -74.006), Coordinate::new(34.052_2, -118.243_7)),
            (Coordinate::new(-33.86, 151.20), Coordinate::new(51.50, -0.12)),
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
        ];
        for (a, b) in pairs {
            assert!((distance_miles(a, b) - distance_miles(b, a)).abs() < EPS);
        }
    }

    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let d = distance_miles(Coordinate::new(40.0, -75.0), Coordinate::new(41.0, -75.0));
        assert!((d - 69.0).abs() < 0.2, "got {d}");
    }

    #[test]
    fn nyc_to_la_is_about_2445_miles() {
        let nyc = Coordinate::new(40.712_8, -74.006);
        let la = Coordinate::new(34.052_2, -118.243_7);
        let d = distance_miles(nyc, la);
        assert!((d - 2445.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn distance_is_nonnegative() {
        let a = Coordinate::new(89.9, 179.9);
        let b = Coordinate::new(-89.9, -179.9);
        assert!(distance_miles(a, b) >= 0.0);
    }
}
