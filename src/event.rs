//! Calendar events, as found in a feed

use serde::{Deserialize, Serialize};

use crate::ical::Timestamp;

/// An iCal `VEVENT` block, restricted to the properties this crate cares about
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    summary: Option<String>,
    /// The normalized `DTSTART`. It may be `None` if the date could not be parsed, but the property was present
    start: Timestamp,
    description: Option<String>,
    url: Option<String>,
}

impl EventRecord {
    pub fn new(summary: Option<String>, start: Timestamp, description: Option<String>, url: Option<String>) -> Self {
        Self { summary, start, description, url }
    }

    pub fn summary(&self) -> Option<&str>     { self.summary.as_deref() }
    pub fn start(&self) -> Timestamp          { self.start }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn url(&self) -> Option<&str>         { self.url.as_deref() }
}
