//! Static registry of ICAO type designators.
//!
//! Designators follow the "Type Designator" column of ICAO Doc 8643.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AircraftType {
    pub identifier: &'static str,
    pub description: &'static str,
}

impl AircraftType {
    const fn new(identifier: &'static str, description: &'static str) -> Self {
        Self {
            identifier,
            description,
        }
    }
}

/// Sentinel that disables type filtering when present in a filter list.
pub const ALL: AircraftType = AircraftType::new("ALL", "All aircraft types");
/// Returned for designators missing from the registry.
pub const UNKNOWN: AircraftType = AircraftType::new("", "Unknown aircraft type");

pub const A400: AircraftType = AircraftType::new("A400", "Airbus A400M Atlas");
pub const B77L: AircraftType = AircraftType::new("B77L", "Boeing 777-200LR / 777F");
pub const F16: AircraftType = AircraftType::new("F16", "General Dynamics F-16 Fighting Falcon");
pub const F35: AircraftType = AircraftType::new("F35", "Lockheed Martin F-35 Lightning II");

static REGISTRY: &[AircraftType] = &[
    ALL,
    A400,
    AircraftType::new("A10", "Fairchild Republic A-10 Thunderbolt II"),
    AircraftType::new("A320", "Airbus A320"),
    AircraftType::new("A332", "Airbus A330-200"),
    AircraftType::new("A3ST", "Airbus A300-600ST Beluga"),
    AircraftType::new("AJET", "Dassault/Dornier Alpha Jet"),
    AircraftType::new("B52", "Boeing B-52 Stratofortress"),
    AircraftType::new("B738", "Boeing 737-800"),
    AircraftType::new("B744", "Boeing 747-400"),
    B77L,
    AircraftType::new("C130", "Lockheed C-130 Hercules"),
    AircraftType::new("C17", "Boeing C-17 Globemaster III"),
    AircraftType::new("C5M", "Lockheed C-5M Super Galaxy"),
    AircraftType::new("E3CF", "Boeing E-3 Sentry (AWACS)"),
    AircraftType::new("EUFI", "Eurofighter Typhoon"),
    AircraftType::new("F15", "McDonnell Douglas F-15 Eagle"),
    F16,
    AircraftType::new("F18H", "Boeing F/A-18E/F Super Hornet"),
    AircraftType::new("F22", "Lockheed Martin F-22 Raptor"),
    F35,
    AircraftType::new("H47", "Boeing CH-47 Chinook"),
    AircraftType::new("H60", "Sikorsky UH-60 Black Hawk"),
    AircraftType::new("K35R", "Boeing KC-135 Stratotanker"),
    AircraftType::new("MRTT", "Airbus A330 MRTT"),
    AircraftType::new("NH90", "NHIndustries NH90"),
    AircraftType::new("RFAL", "Dassault Rafale"),
    AircraftType::new("TEX2", "Beechcraft T-6 Texan II"),
    AircraftType::new("V22", "Bell Boeing V-22 Osprey"),
];

/// Resolves a designator, case-insensitively. Unregistered designators map to
/// [`UNKNOWN`].
pub fn lookup(identifier: &str) -> &'static AircraftType {
    REGISTRY
        .iter()
        .find(|entry| entry.identifier.eq_ignore_ascii_case(identifier.trim()))
        .unwrap_or(&UNKNOWN)
}

pub fn is_known(identifier: &str) -> bool {
    lookup(identifier) != &UNKNOWN
}

/// The full registry, sentinel included.
pub fn entries() -> &'static [AircraftType] {
    REGISTRY
}
