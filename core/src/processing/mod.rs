pub mod spotting;
pub mod tracker;

pub use spotting::SpottingEngine;
pub use tracker::SightingTracker;
