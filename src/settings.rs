//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Part of the ProdID string that describes the organization (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static ORG_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("My organization".to_string())));

/// Part of the ProdID string that describes the product name (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("CourseFeed".to_string())));

/// How many days after today are still considered "upcoming"
pub const WINDOW_DAYS: i64 = 14;

/// The course given to tasks whose title does not tell which course they belong to
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// The title given to tasks that have no `SUMMARY`
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Max number of characters of a description that are displayed in a task list
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Environment variable the `upcoming` binary reads the feed location from, when none is given on its command line
pub const FEED_URL_ENV_VAR: &str = "COURSE_FEED_URL";

/// Read the current value of an overridable setting
pub(crate) fn read(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
