pub mod geo;
pub mod units;

pub use geo::GeoHelper;
pub use units::UnitHelper;
