//! From the raw text of a feed to the list of upcoming tasks
//!
//! Every function here is pure: the reference time is always given by the caller, so that the same feed always gives the same result.

use chrono::{DateTime, Utc};

use crate::ical::parse_feed;
use crate::window::filter_window;
use crate::Task;

/// Every task of a feed, in feed order, without any date filtering
pub fn tasks_from_feed(content: &str) -> Vec<Task> {
    parse_feed(content)
        .iter()
        .map(Task::from)
        .collect()
}

/// The tasks of a feed that are coming up within the next days, sorted by date
pub fn load_tasks(content: &str, now: DateTime<Utc>) -> Vec<Task> {
    let tasks = tasks_from_feed(content);
    let n_tasks = tasks.len();
    let upcoming = filter_window(tasks, now);
    log::debug!("{} tasks in the feed, {} are upcoming", n_tasks, upcoming.len());
    upcoming
}
