use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};
use spottercore::prelude::FilterCriteria;
use spottercore::Coordinate;
use std::fs;
use std::path::Path;

pub const LOCATION_LATITUDE: &str = "LOCATION_LATITUDE";
pub const LOCATION_LONGITUDE: &str = "LOCATION_LONGITUDE";
pub const MAX_RANGE_KILOMETERS: &str = "MAX_RANGE_KILOMETERS";
pub const AIRCRAFT_TYPES: &str = "AIRCRAFT_TYPES";
pub const FETCH_INTERVAL: &str = "FETCH_INTERVAL";
pub const METRICS_PORT: &str = "METRICS_PORT";
pub const MAX_AIRCRAFT_PER_MESSAGE: &str = "MAX_AIRCRAFT_PER_MESSAGE";
/// Older name for [`MAX_AIRCRAFT_PER_MESSAGE`]; the newer name wins when both are set.
pub const MAX_AIRCRAFT_SLACK_MESSAGE: &str = "MAX_AIRCRAFT_SLACK_MESSAGE";

/// Shortest interval the public ADS-B APIs tolerate without rate limiting.
pub const MIN_FETCH_INTERVAL_SECS: u64 = 60;

/// User configuration; every field has a default and may be overridden by a
/// YAML file and then by environment variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotterConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub max_range_km: i64,
    /// Comma separated ICAO designators, `ALL` disables the type filter.
    pub aircraft_types: String,
    pub fetch_interval_secs: u64,
    pub metrics_port: u16,
    pub max_aircraft_per_message: usize,
}

impl Default for SpotterConfig {
    fn default() -> Self {
        Self {
            latitude: 51.17348,
            longitude: 5.45921,
            max_range_km: 30,
            aircraft_types: "ALL".to_string(),
            fetch_interval_secs: MIN_FETCH_INTERVAL_SECS,
            metrics_port: 7070,
            max_aircraft_per_message: 8,
        }
    }
}

impl SpotterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading spotter config {}", path_ref.display()))?;
        let config: SpotterConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing spotter config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Defaults, then the optional YAML file, then the process environment.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = base.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from variables returned by `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(LOCATION_LATITUDE) {
            self.latitude = value
                .trim()
                .parse()
                .with_context(|| format!("parsing {}={}", LOCATION_LATITUDE, value))?;
        }
        if let Some(value) = lookup(LOCATION_LONGITUDE) {
            self.longitude = value
                .trim()
                .parse()
                .with_context(|| format!("parsing {}={}", LOCATION_LONGITUDE, value))?;
        }
        if let Some(value) = lookup(AIRCRAFT_TYPES) {
            self.aircraft_types = value;
        }
        if let Some(value) = lookup(MAX_RANGE_KILOMETERS) {
            self.max_range_km = FilterCriteria::parse(&value, &self.aircraft_types)
                .with_context(|| format!("parsing {}", MAX_RANGE_KILOMETERS))?
                .max_range_km;
        }
        if let Some(value) = lookup(FETCH_INTERVAL) {
            self.fetch_interval_secs = value
                .trim()
                .parse()
                .with_context(|| format!("parsing {}={}", FETCH_INTERVAL, value))?;
        }
        if let Some(value) = lookup(METRICS_PORT) {
            self.metrics_port = value
                .trim()
                .parse()
                .with_context(|| format!("parsing {}={}", METRICS_PORT, value))?;
        }
        for key in [MAX_AIRCRAFT_SLACK_MESSAGE, MAX_AIRCRAFT_PER_MESSAGE] {
            if let Some(value) = lookup(key) {
                self.max_aircraft_per_message = value
                    .trim()
                    .parse()
                    .with_context(|| format!("parsing {}={}", key, value))?;
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.home()?;
        if self.max_aircraft_per_message == 0 {
            anyhow::bail!("max_aircraft_per_message must be at least 1");
        }
        if self.fetch_interval_secs == 0 {
            anyhow::bail!("fetch_interval_secs must be at least 1");
        }
        if self.fetch_interval_secs < MIN_FETCH_INTERVAL_SECS {
            warn!(
                "Fetch interval of {}s detected. You might hit rate limits, consider using the default of {}s instead.",
                self.fetch_interval_secs, MIN_FETCH_INTERVAL_SECS
            );
        }
        Ok(())
    }

    pub fn home(&self) -> anyhow::Result<Coordinate> {
        Coordinate::try_new(self.latitude, self.longitude)
            .context("validating home location")
    }

    pub fn to_filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_type_list(self.max_range_km, &self.aircraft_types)
    }
}
