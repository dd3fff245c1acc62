use super::message::render_messages;
use super::Notifier;
use log::info;
use spottercore::SightingRecord;

/// Writes notifications to stdout and the log.
pub struct ConsoleNotifier {
    max_per_message: usize,
}

impl ConsoleNotifier {
    pub fn new(max_per_message: usize) -> Self {
        Self { max_per_message }
    }
}

impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    fn notify(&mut self, sightings: &[SightingRecord]) -> anyhow::Result<()> {
        info!("notifying {} aircraft via console", sightings.len());
        for message in render_messages(sightings, self.max_per_message) {
            println!("{}", message);
        }
        Ok(())
    }
}
