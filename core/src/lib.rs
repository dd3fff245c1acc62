//! Spotting core for the Rust jetspotter.
//!
//! Turns one fetch cycle's snapshot of aircraft reports into an ordered list of
//! sightings around a home location, and remembers which aircraft were already
//! reported so consecutive cycles only surface newcomers.

pub mod catalog;
pub mod feed;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use feed::{Coordinate, RawAircraft, SightingRecord};
pub use prelude::{CoreError, CoreResult, FilterCriteria};
pub use processing::{SightingTracker, SpottingEngine};
