use serde::{Deserialize, Serialize};
use spottercore::telemetry::MetricsSnapshot;
use spottercore::SightingRecord;

/// State served over HTTP, replaced wholesale after every cycle.
#[derive(Debug, Clone, Serialize, Default)]
pub struct StatusModel {
    pub cycle: u64,
    pub aircraft_seen: usize,
    pub new_this_cycle: usize,
    pub sightings: Vec<SightingRecord>,
    pub metrics: MetricsSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReply {
    pub status: String,
    pub cycle: u64,
}
