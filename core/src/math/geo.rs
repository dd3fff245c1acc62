use crate::feed::Coordinate;

/// Mean Earth radius of the spherical model, kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle helpers on a spherical Earth.
pub struct GeoHelper;

impl GeoHelper {
    /// Unrounded haversine distance in kilometers.
    pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let delta_lat = (b.lat - a.lat).to_radians();
        let delta_lon = (b.lon - a.lon).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // clamp keeps sqrt(1 - h) real when rounding pushes h past 1
        let h = h.clamp(0.0, 1.0);
        EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Distance in whole kilometers, rounded half away from zero.
    pub fn distance_km(a: Coordinate, b: Coordinate) -> i64 {
        Self::haversine_km(a, b).round() as i64
    }

    /// Initial bearing from `a` to `b`, degrees clockwise from north in `[0, 360)`.
    ///
    /// Coincident points yield `0.0`.
    pub fn bearing_deg(a: Coordinate, b: Coordinate) -> f64 {
        if a == b {
            return 0.0;
        }

        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();
        let delta_lon = (b.lon - a.lon).to_radians();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
        if x == 0.0 && y == 0.0 {
            return 0.0;
        }

        let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid can return exactly 360.0 for tiny negative inputs
        if bearing >= 360.0 {
            0.0
        } else {
            bearing
        }
    }

    /// Bearing truncated to a whole degree in `0..=359`.
    pub fn bearing_whole_deg(a: Coordinate, b: Coordinate) -> i64 {
        Self::bearing_deg(a, b).trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANNEKEN_PIS: Coordinate = Coordinate::new(50.844987343465924, 4.349981064923107);
    const ELISABETH_PARK: Coordinate = Coordinate::new(50.86503662037458, 4.32399484006766);
    const CHRIST_REDEEMER: Coordinate = Coordinate::new(-22.951907892908967, -43.21048377096087);
    const PYRAMID_GIZA: Coordinate = Coordinate::new(29.979104641494533, 31.134157868680205);

    #[test]
    fn distance_between_tbilisi_and_kutaisi_airports() {
        let tbilisi = Coordinate::new(41.4007, 44.5705);
        let kutaisi = Coordinate::new(42.1033, 42.2830);
        assert_eq!(GeoHelper::distance_km(tbilisi, kutaisi), 205);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let pairs = [
            (MANNEKEN_PIS, ELISABETH_PARK),
            (CHRIST_REDEEMER, PYRAMID_GIZA),
            (Coordinate::new(89.9, 0.0), Coordinate::new(-89.9, 179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(GeoHelper::distance_km(a, b), GeoHelper::distance_km(b, a));
            assert_eq!(GeoHelper::distance_km(a, a), 0);
        }
    }

    #[test]
    fn bearing_brussels_fixtures() {
        assert_eq!(
            GeoHelper::bearing_whole_deg(MANNEKEN_PIS, ELISABETH_PARK),
            320
        );
        assert_eq!(
            GeoHelper::bearing_whole_deg(ELISABETH_PARK, MANNEKEN_PIS),
            140
        );
    }

    #[test]
    fn bearing_across_the_atlantic() {
        assert_eq!(
            GeoHelper::bearing_whole_deg(CHRIST_REDEEMER, PYRAMID_GIZA),
            56
        );
        assert_eq!(
            GeoHelper::bearing_whole_deg(PYRAMID_GIZA, CHRIST_REDEEMER),
            242
        );
    }

    #[test]
    fn bearing_almost_due_east() {
        let source = Coordinate::new(51.42676766088391, 4.623935349264089);
        let target = Coordinate::new(51.426688015979074, 4.63915475148803);
        assert_eq!(GeoHelper::bearing_whole_deg(source, target), 90);
        assert_eq!(GeoHelper::bearing_deg(source, target).round() as i64, 90);
    }

    #[test]
    fn bearing_stays_in_range() {
        let home = Coordinate::new(51.17348, 5.45921);
        for lat in [-80.0, -10.0, 0.0, 51.0, 51.17348, 80.0] {
            for lon in [-179.0, -5.0, 5.45921, 90.0, 179.0] {
                let bearing = GeoHelper::bearing_deg(home, Coordinate::new(lat, lon));
                assert!((0.0..360.0).contains(&bearing), "{} out of range", bearing);
                assert!(!bearing.is_nan());
            }
        }
    }

    #[test]
    fn bearing_of_coincident_points_is_zero() {
        assert_eq!(GeoHelper::bearing_deg(MANNEKEN_PIS, MANNEKEN_PIS), 0.0);
        assert_eq!(GeoHelper::bearing_whole_deg(PYRAMID_GIZA, PYRAMID_GIZA), 0);
    }

    #[test]
    fn cardinal_bearings() {
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(
            GeoHelper::bearing_deg(origin, Coordinate::new(1.0, 0.0)).round(),
            0.0
        );
        assert_eq!(
            GeoHelper::bearing_deg(origin, Coordinate::new(0.0, 1.0)).round(),
            90.0
        );
        assert_eq!(
            GeoHelper::bearing_deg(origin, Coordinate::new(-1.0, 0.0)).round(),
            180.0
        );
        assert_eq!(
            GeoHelper::bearing_deg(origin, Coordinate::new(0.0, -1.0)).round(),
            270.0
        );
    }
}
