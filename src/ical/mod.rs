//! This module handles conversion between iCal feeds and internal representations
//!
//! Parsing is hand-written (it only needs a few `VEVENT` properties, and must not choke on malformed feeds), while generation relies on the `ics` crate.

mod text;
pub use text::{escape, unescape};
mod date;
pub use date::{parse_date, Timestamp};
mod parser;
pub use parser::parse_feed;
mod builder;
pub use builder::build_from;

use crate::settings::{self, ORG_NAME, PRODUCT_NAME};

pub fn default_prod_id() -> String {
    format!("-//{}//{}//EN", settings::read(&ORG_NAME), settings::read(&PRODUCT_NAME))
}
