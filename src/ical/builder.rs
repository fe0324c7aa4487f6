//! A module to build iCal feeds

use chrono::{DateTime, Utc};
use ics::properties::{Categories, Description, DtStart, Summary, URL};
use ics::{Event, ICalendar};
use uuid::Uuid;

use crate::ical::{default_prod_id, escape};
use crate::Task;

/// Create an iCal feed that contains one `VEVENT` per task.
///
/// Tasks that have no valid date cannot be expressed as events, and are skipped. \
/// Content lines are never folded, so that the output can be read back by [`crate::ical::parse_feed`].
pub fn build_from(tasks: &[Task]) -> String {
    let s_now = format_date_time(&Utc::now());
    let mut calendar = ICalendar::new("2.0", default_prod_id());

    for task in tasks {
        let date = match task.date() {
            Some(date) => date,
            None => {
                log::warn!("Task {:?} has no valid date, it will not be exported", task.title());
                continue;
            },
        };

        let uid = Uuid::new_v4().to_hyphenated().to_string();
        let mut event = Event::new(uid, s_now.clone());
        event.push(DtStart::new(format_date_time(&date)));
        event.push(Summary::new(escape(task.title())));
        event.push(Categories::new(escape(task.course())));
        if task.description().is_empty() == false {
            event.push(Description::new(escape(task.description())));
        }
        if task.has_url() {
            event.push(URL::new(task.url().to_string()));
        }
        calendar.add_event(event);
    }

    unfold(&calendar.to_string())
}

/// `ics` folds content lines longer than 75 octets (RFC5545 section 3.1), this joins them back
fn unfold(ical: &str) -> String {
    ical.replace("\r\n ", "").replace("\r\n\t", "")
}

fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
