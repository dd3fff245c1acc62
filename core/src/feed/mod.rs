pub mod aircraft;
pub mod sighting;

pub use aircraft::{parse_snapshot, Coordinate, RawAircraft};
pub use sighting::SightingRecord;
