//! This crate turns a course calendar feed (e.g. an iCal export from Canvas or Moodle) into a list of upcoming coursework.
//!
//! The core of this crate is a pure pipeline, in the [`pipeline`] module: the raw text of a feed is parsed into [`EventRecord`]s
//! (see the [`ical`] module), each record becomes a [`Task`] whose course and type are guessed from its title (see [`classify`]),
//! and the tasks that happen in the next two weeks are kept and sorted (see [`window`]). \
//! The reference "now" is always given by the caller, so that results are reproducible.
//!
//! Fetching the feed is not part of this core. A [`FeedSource`](traits::FeedSource) can download it (see the [`client`] module)
//! or read it from the disk (see the [`local`] module), and a [`Provider`] glues a source and the pipeline together.

pub mod traits;

pub mod ical;
mod event;
pub use event::EventRecord;
pub mod task;
pub use task::{Task, TaskType};
pub mod classify;
pub mod window;
pub mod pipeline;
pub use pipeline::load_tasks;
pub mod provider;
pub use provider::Provider;

pub mod client;
pub mod local;

pub mod settings;
pub mod utils;
