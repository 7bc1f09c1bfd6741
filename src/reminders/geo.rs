//! Great-circle distance on a spherical-earth approximation.

use crate::models::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Haversine distance in kilometers. Inputs are unvalidated degrees;
/// the formula is symmetric in its squared-sine terms, so
/// `distance_km(a, b) == distance_km(b, a)` exactly.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (a.latitude - b.latitude).to_radians();
    let d_lon = (a.longitude - b.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinates = Coordinates {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    const BERLIN: Coordinates = Coordinates {
        latitude: 52.52,
        longitude: 13.405,
    };

    #[test]
    fn distance_is_zero_for_equal_points() {
        assert_eq!(distance_km(PARIS, PARIS), 0.0);
        let origin = Coordinates::new(0.0, 0.0);
        assert_eq!(distance_km(origin, origin), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_km(PARIS, BERLIN), distance_km(BERLIN, PARIS));
        let a = Coordinates::new(-33.8688, 151.2093);
        let b = Coordinates::new(40.7128, -74.006);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn paris_to_berlin_is_about_880_km() {
        let d = distance_km(PARIS, BERLIN);
        assert!(d > 850.0 && d < 900.0, "got {d}");
    }

    #[test]
    fn distance_is_non_negative_for_out_of_range_inputs() {
        // Inputs are not validated; the result must still be >= 0.
        let weird = Coordinates::new(123.0, -700.0);
        assert!(distance_km(weird, PARIS) >= 0.0);
    }
}
