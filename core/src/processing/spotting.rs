use crate::catalog;
use crate::feed::{Coordinate, RawAircraft, SightingRecord};
use crate::math::{GeoHelper, UnitHelper};
use crate::prelude::FilterCriteria;
use crate::telemetry::log::LogManager;

/// Turns one snapshot into sightings around a home location.
///
/// Output is ordered nearest first; records at equal distance keep their
/// snapshot order. The engine never fails: missing fields arrive as defaults
/// and are reported like any other record.
pub struct SpottingEngine {
    home: Coordinate,
    criteria: FilterCriteria,
    logger: LogManager,
}

impl SpottingEngine {
    pub fn new(home: Coordinate, criteria: FilterCriteria) -> Self {
        Self {
            home,
            criteria,
            logger: LogManager::new(),
        }
    }

    pub fn home(&self) -> Coordinate {
        self.home
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn spot(&self, raw: &[RawAircraft]) -> Vec<SightingRecord> {
        if self.criteria.max_range_km < 0 {
            self.logger.caution(&format!(
                "max range {} km is negative, nothing will match",
                self.criteria.max_range_km
            ));
        }

        let in_range: Vec<SightingRecord> = raw
            .iter()
            .map(|aircraft| self.enrich(aircraft))
            .filter(|record| record.distance_km <= self.criteria.max_range_km)
            .collect();

        let matching = filter_by_types(in_range, &self.criteria);
        let sightings = sort_by_distance(matching);

        self.logger.detail(&format!(
            "spotted {} of {} aircraft within {} km",
            sightings.len(),
            raw.len(),
            self.criteria.max_range_km
        ));
        sightings
    }

    fn enrich(&self, aircraft: &RawAircraft) -> SightingRecord {
        let position = aircraft.position();
        let type_id = aircraft.type_id.trim().to_uppercase();

        SightingRecord {
            callsign: aircraft.callsign.clone(),
            description: catalog::lookup(&type_id).description.to_string(),
            type_id,
            distance_km: GeoHelper::distance_km(self.home, position),
            bearing_deg: GeoHelper::bearing_whole_deg(self.home, position),
            altitude_m: UnitHelper::feet_to_meters(aircraft.altitude_ft),
            speed_kmh: UnitHelper::knots_to_kmh(aircraft.ground_speed_kt),
            heading_deg: aircraft
                .heading
                .filter(|h| h.is_finite())
                .map(normalize_heading),
        }
    }
}

/// Whole degrees in `0..=359`.
fn normalize_heading(heading: f64) -> i64 {
    let heading = heading.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if heading >= 360.0 {
        0
    } else {
        heading.trunc() as i64
    }
}

/// One-shot form of [`SpottingEngine::spot`].
pub fn spot(
    raw: &[RawAircraft],
    home: Coordinate,
    criteria: &FilterCriteria,
) -> Vec<SightingRecord> {
    SpottingEngine::new(home, criteria.clone()).spot(raw)
}

/// Keeps records whose type is accepted, preserving their relative order.
pub fn filter_by_types(
    records: Vec<SightingRecord>,
    criteria: &FilterCriteria,
) -> Vec<SightingRecord> {
    if criteria.accepts_all() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| criteria.accepts_type(&record.type_id))
        .collect()
}

/// Stable ascending sort by distance.
pub fn sort_by_distance(mut records: Vec<SightingRecord>) -> Vec<SightingRecord> {
    records.sort_by_key(|record| record.distance_km);
    records
}
