use serde::Serialize;
use std::sync::Mutex;

/// Counters fed by every fetch cycle; shareable across threads.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub cycles: u64,
    pub aircraft_seen: u64,
    pub sightings: u64,
    pub notified: u64,
    pub notify_errors: u64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    /// Records one completed cycle: raw records in, sightings out, new aircraft.
    pub fn record_cycle(&self, aircraft_seen: usize, sightings: usize, notified: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.cycles += 1;
            metrics.aircraft_seen += aircraft_seen as u64;
            metrics.sightings += sightings as u64;
            metrics.notified += notified as u64;
        }
    }

    pub fn record_notify_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.notify_errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
