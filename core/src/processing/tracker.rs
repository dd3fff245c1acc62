use crate::feed::SightingRecord;
use crate::telemetry::log::LogManager;
use std::collections::{HashMap, HashSet};

/// Remembers which callsigns were reported so an aircraft that stays in the
/// matching set is announced only once.
///
/// A callsign leaves the tracker as soon as a cycle's sightings no longer
/// contain it; showing up again afterwards counts as a new entry.
pub struct SightingTracker {
    reported: HashMap<String, u64>,
    cycle: u64,
    logger: LogManager,
}

impl SightingTracker {
    pub fn new() -> Self {
        Self {
            reported: HashMap::new(),
            cycle: 0,
            logger: LogManager::new(),
        }
    }

    /// Returns the sightings that entered the tracked set this cycle, in the
    /// order of `current`, and forgets callsigns absent from `current`.
    pub fn delta(&mut self, current: &[SightingRecord]) -> Vec<SightingRecord> {
        self.cycle += 1;

        let present: HashSet<&str> = current.iter().map(|r| r.callsign.as_str()).collect();
        let before = self.reported.len();
        self.reported
            .retain(|callsign, _| present.contains(callsign.as_str()));
        let departed = before - self.reported.len();

        let mut entered = Vec::new();
        for record in current {
            if !self.reported.contains_key(&record.callsign) {
                self.reported.insert(record.callsign.clone(), self.cycle);
                entered.push(record.clone());
            }
        }

        let summary = format!(
            "cycle {}: {} entered, {} departed, {} tracked",
            self.cycle,
            entered.len(),
            departed,
            self.reported.len()
        );
        if entered.is_empty() {
            self.logger.detail(&summary);
        } else {
            self.logger.record(&summary);
        }
        entered
    }

    pub fn is_tracking(&self, callsign: &str) -> bool {
        self.reported.contains_key(callsign)
    }

    /// Cycle in which `callsign` was first reported, if still tracked.
    pub fn reported_in(&self, callsign: &str) -> Option<u64> {
        self.reported.get(callsign).copied()
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    pub fn reset(&mut self) {
        self.reported.clear();
        self.cycle = 0;
    }
}

impl Default for SightingTracker {
    fn default() -> Self {
        Self::new()
    }
}
