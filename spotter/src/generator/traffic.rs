use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spottercore::{Coordinate, RawAircraft};

const KM_PER_DEGREE: f64 = 111.195;

/// Configuration for generating synthetic traffic around a home location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    pub aircraft_count: usize,
    /// Aircraft are placed uniformly within this radius of home.
    pub radius_km: f64,
    pub types: Vec<String>,
    pub seconds_per_cycle: f64,
    pub seed: u64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            aircraft_count: 12,
            radius_km: 60.0,
            types: ["F16", "F35", "A400", "B77L", "C130", "B738", "ZZZZ"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            seconds_per_cycle: 60.0,
            seed: 0,
        }
    }
}

/// Seeded fleet that drifts along its headings between snapshots.
pub struct TrafficGenerator {
    home: Coordinate,
    config: TrafficConfig,
    rng: StdRng,
    fleet: Vec<RawAircraft>,
    next_serial: usize,
}

impl TrafficGenerator {
    pub fn new(home: Coordinate, config: TrafficConfig) -> anyhow::Result<Self> {
        if config.types.is_empty() {
            anyhow::bail!("traffic generator needs at least one aircraft type");
        }
        if !(config.radius_km.is_finite() && config.radius_km > 0.0) {
            anyhow::bail!("traffic radius must be positive, got {}", config.radius_km);
        }

        let rng = StdRng::seed_from_u64(config.seed);
        let mut generator = Self {
            home,
            config,
            rng,
            fleet: Vec::new(),
            next_serial: 0,
        };
        let count = generator.config.aircraft_count;
        let fleet = (0..count)
            .map(|_| generator.spawn())
            .collect::<anyhow::Result<Vec<_>>>()?;
        generator.fleet = fleet;
        Ok(generator)
    }

    /// Advances every aircraft by one cycle and returns the resulting snapshot.
    ///
    /// Aircraft that drift beyond twice the radius are replaced by newcomers.
    pub fn next_snapshot(&mut self) -> anyhow::Result<Vec<RawAircraft>> {
        let hours = self.config.seconds_per_cycle / 3600.0;
        let limit_km = self.config.radius_km * 2.0;

        for idx in 0..self.fleet.len() {
            let moved = advance(&self.fleet[idx], hours);
            let distance = spottercore::math::GeoHelper::haversine_km(self.home, moved.position());
            let next = if distance > limit_km {
                self.spawn()?
            } else {
                moved
            };
            self.fleet[idx] = next;
        }

        Ok(self.fleet.clone())
    }

    fn spawn(&mut self) -> anyhow::Result<RawAircraft> {
        let type_idx = self.rng.gen_range(0..self.config.types.len());
        let type_id = self
            .config
            .types
            .get(type_idx)
            .context("picking aircraft type")?
            .clone();

        let range = self.config.radius_km * self.rng.gen_range(0.0f64..1.0).sqrt();
        let direction = self.rng.gen_range(0.0f64..360.0);
        let position = offset(self.home, range, direction);

        self.next_serial += 1;
        let callsign = format!("{}{:03}", callsign_prefix(&type_id), self.next_serial);

        Ok(RawAircraft::new(&callsign, &type_id, position)
            .with_altitude(self.rng.gen_range(500.0..38000.0f64).round())
            .with_speed(self.rng.gen_range(90.0..520.0f64).round())
            .with_heading(self.rng.gen_range(0.0..360.0f64).round()))
    }
}

fn callsign_prefix(type_id: &str) -> &'static str {
    match type_id {
        "F16" | "F35" => "APEX",
        "A400" | "C130" => "GRZLY",
        _ => "XSG",
    }
}

fn advance(aircraft: &RawAircraft, hours: f64) -> RawAircraft {
    let km = aircraft.ground_speed_kt * spottercore::math::units::KMH_PER_KNOT * hours;
    let heading = aircraft.heading.unwrap_or(0.0);
    let position = offset(aircraft.position(), km, heading);

    let mut moved = aircraft.clone();
    moved.latitude = position.lat;
    moved.longitude = position.lon;
    moved
}

/// Flat-earth displacement, adequate over the few tens of kilometers a cycle covers.
fn offset(from: Coordinate, km: f64, bearing_deg: f64) -> Coordinate {
    let bearing = bearing_deg.to_radians();
    let lat = from.lat + km * bearing.cos() / KM_PER_DEGREE;
    let lon_scale = (KM_PER_DEGREE * from.lat.to_radians().cos()).max(1e-6);
    let lon = from.lon + km * bearing.sin() / lon_scale;
    Coordinate::new(lat.clamp(-90.0, 90.0), wrap_longitude(lon))
}

fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use spottercore::math::GeoHelper;

    const HOME: Coordinate = Coordinate::new(51.17348, 5.45921);

    #[test]
    fn generator_builds_requested_fleet_within_radius() {
        let config = TrafficConfig {
            aircraft_count: 25,
            radius_km: 40.0,
            ..Default::default()
        };
        let mut generator = TrafficGenerator::new(HOME, config.clone()).unwrap();
        let snapshot = generator.next_snapshot().unwrap();

        assert_eq!(snapshot.len(), 25);
        for aircraft in &snapshot {
            assert!(config.types.contains(&aircraft.type_id));
            assert!(
                GeoHelper::haversine_km(HOME, aircraft.position()) <= 80.0 + 1.0
            );
        }
    }

    #[test]
    fn same_seed_same_traffic() {
        let config = TrafficConfig {
            seed: 13,
            ..Default::default()
        };
        let mut first = TrafficGenerator::new(HOME, config.clone()).unwrap();
        let mut second = TrafficGenerator::new(HOME, config).unwrap();

        for _ in 0..3 {
            assert_eq!(
                first.next_snapshot().unwrap(),
                second.next_snapshot().unwrap()
            );
        }
    }

    #[test]
    fn fleet_keeps_callsigns_between_cycles() {
        let config = TrafficConfig {
            radius_km: 500.0,
            seconds_per_cycle: 1.0,
            ..Default::default()
        };
        let mut generator = TrafficGenerator::new(HOME, config).unwrap();
        let first = generator.next_snapshot().unwrap();
        let second = generator.next_snapshot().unwrap();

        let names = |s: &[RawAircraft]| s.iter().map(|a| a.callsign.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));
        assert_ne!(first[0].position(), second[0].position());
    }

    #[test]
    fn empty_type_list_is_rejected() {
        let config = TrafficConfig {
            types: Vec::new(),
            ..Default::default()
        };
        assert!(TrafficGenerator::new(HOME, config).is_err());
    }

    #[test]
    fn offset_moves_north_and_east() {
        let north = offset(HOME, 10.0, 0.0);
        assert!(north.lat > HOME.lat);
        assert_eq!(GeoHelper::distance_km(HOME, north), 10);

        let east = offset(HOME, 10.0, 90.0);
        assert!(east.lon > HOME.lon);
        assert_eq!(GeoHelper::bearing_deg(HOME, east).round() as i64, 90);
    }
}
