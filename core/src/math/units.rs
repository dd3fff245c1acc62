/// Kilometers per hour in one knot.
pub const KMH_PER_KNOT: f64 = 1.852;
/// Meters in one foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Imperial to metric conversions used when presenting a sighting.
///
/// `f64::round` rounds half away from zero, which is what the presented
/// integers are pinned to.
pub struct UnitHelper;

impl UnitHelper {
    pub fn knots_to_kmh(knots: f64) -> i64 {
        (knots * KMH_PER_KNOT).round() as i64
    }

    pub fn feet_to_meters(feet: f64) -> i64 {
        (feet * METERS_PER_FOOT).round() as i64
    }
}
