pub mod console;
pub mod message;

pub use console::ConsoleNotifier;

use spottercore::SightingRecord;

/// Outbound channel for newly spotted aircraft.
pub trait Notifier {
    fn name(&self) -> &str;
    fn notify(&mut self, sightings: &[SightingRecord]) -> anyhow::Result<()>;
}
