//! Selection of the tasks that are coming up soon

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

use crate::settings::WINDOW_DAYS;
use crate::Task;

/// Keep the tasks that happen between the day of `now` and [`WINDOW_DAYS`] days later (both days included), sorted by date.
///
/// Days are local calendar days. Tasks that happen on the same date keep their relative order. \
/// Tasks with an unparseable date are never kept.
pub fn filter_window(tasks: Vec<Task>, now: DateTime<Utc>) -> Vec<Task> {
    let window_start = local_day(now);
    let window_end = window_start + Duration::days(WINDOW_DAYS);

    let mut kept: Vec<Task> = tasks.into_iter()
        .filter(|task| match task.date() {
            None => {
                log::debug!("Ignoring task {:?}, that has an invalid date", task.title());
                false
            },
            Some(date) => {
                let day = local_day(date);
                window_start <= day && day <= window_end
            },
        })
        .collect();

    // This is a stable sort
    kept.sort_by_key(|task| task.date());
    kept
}

fn local_day(dt: DateTime<Utc>) -> NaiveDate {
    dt.with_timezone(&Local).date_naive()
}
