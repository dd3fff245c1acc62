use crate::generator::TrafficGenerator;
use anyhow::Context;
use spottercore::feed::parse_snapshot;
use spottercore::RawAircraft;
use std::fs;
use std::path::PathBuf;

/// Where each fetch cycle's snapshot comes from.
pub enum SnapshotSource {
    /// JSON file, re-read every cycle so an external fetcher can refresh it.
    File(PathBuf),
    Synthetic(TrafficGenerator),
}

impl SnapshotSource {
    pub fn describe(&self) -> String {
        match self {
            SnapshotSource::File(path) => format!("snapshot file {}", path.display()),
            SnapshotSource::Synthetic(_) => "synthetic traffic".to_string(),
        }
    }

    pub fn next_snapshot(&mut self) -> anyhow::Result<Vec<RawAircraft>> {
        match self {
            SnapshotSource::File(path) => {
                let contents = fs::read_to_string(path.as_path())
                    .with_context(|| format!("reading snapshot {}", path.display()))?;
                parse_snapshot(&contents)
                    .with_context(|| format!("parsing snapshot {}", path.display()))
            }
            SnapshotSource::Synthetic(generator) => generator.next_snapshot(),
        }
    }
}
