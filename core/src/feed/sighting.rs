use serde::{Deserialize, Serialize};

/// One aircraft enriched for notification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SightingRecord {
    pub callsign: String,
    pub type_id: String,
    pub description: String,
    pub distance_km: i64,
    pub bearing_deg: i64,
    pub altitude_m: i64,
    pub speed_kmh: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<i64>,
}
