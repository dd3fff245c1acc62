use spottercore::SightingRecord;

/// One-line summary of a sighting.
pub fn render_sighting(record: &SightingRecord) -> String {
    let callsign = if record.callsign.is_empty() {
        "UNKNOWN"
    } else {
        record.callsign.as_str()
    };
    let type_id = if record.type_id.is_empty() {
        "?"
    } else {
        record.type_id.as_str()
    };

    let mut line = format!(
        "{} ({}, {}) {} km @ {}° | {} m | {} km/h",
        callsign,
        type_id,
        record.description,
        record.distance_km,
        record.bearing_deg,
        record.altitude_m,
        record.speed_kmh
    );
    if let Some(heading) = record.heading_deg {
        line.push_str(&format!(" | heading {}°", heading));
    }
    line
}

/// Splits `sightings` into messages of at most `max_per_message` aircraft.
pub fn render_messages(sightings: &[SightingRecord], max_per_message: usize) -> Vec<String> {
    let chunk = max_per_message.max(1);
    let parts = (sightings.len() + chunk - 1) / chunk;

    sightings
        .chunks(chunk)
        .enumerate()
        .map(|(idx, group)| {
            let header = if parts > 1 {
                format!(
                    "Spotted {} aircraft ({}/{})",
                    sightings.len(),
                    idx + 1,
                    parts
                )
            } else {
                format!("Spotted {} aircraft", sightings.len())
            };
            let body = group
                .iter()
                .map(|record| format!("- {}", render_sighting(record)))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}", header, body)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(callsign: &str) -> SightingRecord {
        SightingRecord {
            callsign: callsign.into(),
            type_id: "F16".into(),
            description: "General Dynamics F-16 Fighting Falcon".into(),
            distance_km: 12,
            bearing_deg: 320,
            altitude_m: 1524,
            speed_kmh: 741,
            heading_deg: None,
        }
    }

    #[test]
    fn sighting_renders_on_one_line() {
        assert_eq!(
            render_sighting(&record("APEX11")),
            "APEX11 (F16, General Dynamics F-16 Fighting Falcon) 12 km @ 320° | 1524 m | 741 km/h"
        );
    }

    #[test]
    fn missing_callsign_is_labelled() {
        let mut unnamed = record("");
        unnamed.heading_deg = Some(90);
        let line = render_sighting(&unnamed);
        assert!(line.starts_with("UNKNOWN (F16"));
        assert!(line.ends_with("heading 90°"));
    }

    #[test]
    fn large_deltas_are_split() {
        let sightings: Vec<_> = (0..5).map(|i| record(&format!("APEX{}", i))).collect();
        let messages = render_messages(&sightings, 2);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Spotted 5 aircraft (1/3)"));
        assert_eq!(messages[2].lines().count(), 2);
    }

    #[test]
    fn no_sightings_no_messages() {
        assert!(render_messages(&[], 8).is_empty());
    }
}
