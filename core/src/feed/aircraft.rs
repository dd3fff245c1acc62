use crate::prelude::{CoreError, CoreResult};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Builds a coordinate without range checks; feed data is trusted.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate, rejecting values outside `[-90, 90]` x `[-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Ok(Self::new(lat, lon))
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }
}

/// One aircraft report as handed over by the acquisition side.
///
/// Every field tolerates absence or `null`. Aliases accept the ADS-B Exchange
/// v2 field names (`flight`, `t`, `lat`, `lon`, `alt_baro`, `gs`, `track`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawAircraft {
    #[serde(default, alias = "flight", deserialize_with = "trimmed_string")]
    pub callsign: String,
    #[serde(default, alias = "t", deserialize_with = "trimmed_string")]
    pub type_id: String,
    #[serde(default, alias = "lat", deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, alias = "lon", deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(default, alias = "alt_baro", deserialize_with = "altitude_feet")]
    pub altitude_ft: f64,
    #[serde(default, alias = "gs", deserialize_with = "null_as_default")]
    pub ground_speed_kt: f64,
    #[serde(default, alias = "track")]
    pub heading: Option<f64>,
}

impl RawAircraft {
    pub fn new(callsign: &str, type_id: &str, position: Coordinate) -> Self {
        Self {
            callsign: callsign.to_string(),
            type_id: type_id.to_string(),
            latitude: position.lat,
            longitude: position.lon,
            ..Default::default()
        }
    }

    pub fn with_altitude(mut self, feet: f64) -> Self {
        self.altitude_ft = feet;
        self
    }

    pub fn with_speed(mut self, knots: f64) -> Self {
        self.ground_speed_kt = knots;
        self
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Wrapped {
        #[serde(default, deserialize_with = "null_as_default")]
        ac: Vec<RawAircraft>,
    },
    Bare(Vec<RawAircraft>),
}

/// Parses a snapshot, either an `{"ac": [...]}` response body or a bare array.
pub fn parse_snapshot(json: &str) -> serde_json::Result<Vec<RawAircraft>> {
    let document: SnapshotDocument = serde_json::from_str(json)?;
    Ok(match document {
        SnapshotDocument::Wrapped { ac } => ac,
        SnapshotDocument::Bare(aircraft) => aircraft,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = null_as_default(deserializer)?;
    Ok(value.trim().to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AltitudeField {
    Feet(f64),
    // "ground" and any other marker
    Marker(IgnoredAny),
}

fn altitude_feet<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AltitudeField>::deserialize(deserializer)? {
        Some(AltitudeField::Feet(feet)) => feet,
        Some(AltitudeField::Marker(_)) | None => 0.0,
    })
}
