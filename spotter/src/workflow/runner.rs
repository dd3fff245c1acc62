use crate::notify::Notifier;
use crate::workflow::config::SpotterConfig;
use anyhow::Context;
use log::{error, info};
use spottercore::telemetry::MetricsRecorder;
use spottercore::{RawAircraft, SightingRecord, SightingTracker, SpottingEngine};
use std::sync::Arc;

pub struct CycleResult {
    pub cycle: u64,
    pub aircraft_seen: usize,
    /// Every matching aircraft this cycle, nearest first.
    pub sightings: Vec<SightingRecord>,
    /// The subset not reported in the previous cycle.
    pub new_sightings: Vec<SightingRecord>,
}

/// Drives one fetch cycle at a time: spot, deduplicate, notify, count.
pub struct Runner {
    engine: SpottingEngine,
    tracker: SightingTracker,
    notifiers: Vec<Box<dyn Notifier + Send>>,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: &SpotterConfig, metrics: Arc<MetricsRecorder>) -> anyhow::Result<Self> {
        let home = config.home().context("building spotting engine")?;
        Ok(Self {
            engine: SpottingEngine::new(home, config.to_filter_criteria()),
            tracker: SightingTracker::new(),
            notifiers: Vec::new(),
            metrics,
        })
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier + Send>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn execute(&mut self, snapshot: &[RawAircraft]) -> CycleResult {
        let sightings = self.engine.spot(snapshot);
        let new_sightings = self.tracker.delta(&sightings);

        if !new_sightings.is_empty() {
            for notifier in self.notifiers.iter_mut() {
                if let Err(err) = notifier.notify(&new_sightings) {
                    error!("{} notification failed: {:#}", notifier.name(), err);
                    self.metrics.record_notify_error();
                }
            }
        }

        self.metrics
            .record_cycle(snapshot.len(), sightings.len(), new_sightings.len());
        info!(
            "cycle {}: {} aircraft, {} in range, {} new",
            self.tracker.cycle(),
            snapshot.len(),
            sightings.len(),
            new_sightings.len()
        );

        CycleResult {
            cycle: self.tracker.cycle(),
            aircraft_seen: snapshot.len(),
            sightings,
            new_sightings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::source::SnapshotSource;
    use spottercore::Coordinate;
    use std::sync::Mutex;

    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<Vec<String>>>>,
        fail: bool,
    }

    impl Notifier for RecordingNotifier {
        fn name(&self) -> &str {
            "recording"
        }

        fn notify(&mut self, sightings: &[SightingRecord]) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("webhook unreachable");
            }
            let callsigns = sightings.iter().map(|s| s.callsign.clone()).collect();
            self.sent.lock().unwrap().push(callsigns);
            Ok(())
        }
    }

    fn aircraft(callsign: &str, type_id: &str, lat: f64) -> RawAircraft {
        RawAircraft::new(callsign, type_id, Coordinate::new(lat, 5.45921))
    }

    fn config() -> SpotterConfig {
        SpotterConfig {
            aircraft_types: "F16,A400".into(),
            ..Default::default()
        }
    }

    #[test]
    fn runner_notifies_only_new_aircraft() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let metrics = Arc::new(MetricsRecorder::new());
        let mut runner = Runner::new(&config(), metrics.clone())
            .unwrap()
            .with_notifier(Box::new(RecordingNotifier {
                sent: sent.clone(),
                fail: false,
            }));

        let first = vec![
            aircraft("APEX11", "F16", 51.3),
            aircraft("XSG123", "B77L", 51.2),
            aircraft("GRZLY11", "A400", 51.2),
        ];
        let result = runner.execute(&first);
        assert_eq!(result.cycle, 1);
        assert_eq!(result.sightings.len(), 2);
        assert_eq!(result.new_sightings[0].callsign, "GRZLY11");

        let second = vec![
            aircraft("APEX11", "F16", 51.3),
            aircraft("APEX12", "F16", 51.25),
        ];
        let result = runner.execute(&second);
        assert_eq!(result.new_sightings.len(), 1);
        assert_eq!(result.new_sightings[0].callsign, "APEX12");

        // nothing new, nothing sent
        runner.execute(&second);

        assert_eq!(
            *sent.lock().unwrap(),
            vec![
                vec!["GRZLY11".to_string(), "APEX11".to_string()],
                vec!["APEX12".to_string()]
            ]
        );
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.cycles, 3);
        assert_eq!(snapshot.aircraft_seen, 7);
        assert_eq!(snapshot.notified, 3);
    }

    #[test]
    fn bundled_sample_snapshot() {
        let dir = env!("CARGO_MANIFEST_DIR");
        let config = SpotterConfig::load(format!("{}/data/spotter.yaml", dir)).unwrap();
        let mut source = SnapshotSource::File(format!("{}/data/snapshot.json", dir).into());
        let mut runner = Runner::new(&config, Arc::new(MetricsRecorder::new())).unwrap();

        let result = runner.execute(&source.next_snapshot().unwrap());
        let callsigns: Vec<&str> = result
            .sightings
            .iter()
            .map(|s| s.callsign.as_str())
            .collect();
        // both F16s are 8 km out and keep their feed order
        assert_eq!(callsigns, vec!["GRZLY11", "APEX11", "APEX12"]);
        assert_eq!(result.sightings[0].altitude_m, 0);
        assert_eq!(result.sightings[1].distance_km, 8);
        assert_eq!(result.sightings[2].distance_km, 8);
    }

    #[test]
    fn failing_notifier_is_counted_not_fatal() {
        let metrics = Arc::new(MetricsRecorder::new());
        let mut runner = Runner::new(&config(), metrics.clone())
            .unwrap()
            .with_notifier(Box::new(RecordingNotifier {
                sent: Arc::new(Mutex::new(Vec::new())),
                fail: true,
            }));

        let result = runner.execute(&[aircraft("APEX11", "F16", 51.2)]);
        assert_eq!(result.new_sightings.len(), 1);
        assert_eq!(metrics.snapshot().notify_errors, 1);
    }
}
