//! A module to parse iCal feeds
//!
//! This parser is deliberately tolerant: anything it does not understand is skipped rather than reported.

use crate::event::EventRecord;
use crate::ical::{parse_date, unescape, Timestamp};

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// Parse every `VEVENT` of an iCal feed into [`EventRecord`]s, in the order they appear.
///
/// Blocks that lack a `SUMMARY` or a `DTSTART`, or that are never closed, are dropped.
pub fn parse_feed(content: &str) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let mut state = State::Outside;

    for line in content.split('\n') {
        let line = line.trim();

        state = match (state, line) {
            (_, BEGIN_EVENT) => State::Inside(Accumulator::default()),

            (State::Inside(acc), END_EVENT) => {
                match acc.into_record() {
                    Some(record) => records.push(record),
                    None => log::debug!("Dropping an event that has no SUMMARY or no DTSTART"),
                }
                State::Outside
            },

            (State::Inside(mut acc), line) => {
                if let Some(field) = RawField::parse(line) {
                    acc.push(field);
                }
                State::Inside(acc)
            },

            (State::Outside, _) => State::Outside,
        };
    }

    if let State::Inside(_) = state {
        log::debug!("Feed ends inside an unterminated event, ignoring it");
    }
    records
}

enum State {
    Outside,
    Inside(Accumulator),
}

/// A `KEY:value` line. Only the first colon separates the key from the value
struct RawField<'a> {
    key: String,
    value: &'a str,
}

impl<'a> RawField<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let (key, value) = line.split_once(':')?;
        Some(Self { key: key.to_lowercase(), value })
    }
}

#[derive(Default)]
struct Accumulator {
    summary: Option<String>,
    start: Option<Timestamp>,
    description: Option<String>,
    url: Option<String>,
}

impl Accumulator {
    fn push(&mut self, field: RawField<'_>) {
        match field.key.as_str() {
            "summary" => self.summary = Some(unescape(field.value)),
            "dtstart" => self.start = Some(parse_date(field.value)),
            "description" => self.description = Some(unescape(field.value)),
            "url" => self.url = Some(field.value.to_string()),
            _ => {},
        }
    }

    fn into_record(self) -> Option<EventRecord> {
        let summary = self.summary?;
        let start = self.start?;
        Some(EventRecord::new(Some(summary), start, self.description, self.url))
    }
}
