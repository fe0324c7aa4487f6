//! This modules abstracts a feed source and the task pipeline into a single "load" operation
//!
//! A [`Provider`] is what a user interface would typically hold: it fetches a feed, turns it into tasks,
//! and tells whether this worked, so that the UI can switch between its "loading", "error" and "list" views.

use std::error::Error;

use chrono::{DateTime, Utc};

use crate::pipeline::{load_tasks, tasks_from_feed};
use crate::traits::FeedSource;
use crate::Task;

/// The outcome of the last load
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Nothing has been loaded yet
    NotLoaded,
    /// The feed has been fetched and parsed
    Loaded(Vec<Task>),
    /// The feed could not be fetched
    Failed(String),
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::NotLoaded
    }
}

/// A data source that combines a [`FeedSource`] and the task pipeline
pub struct Provider<S: FeedSource> {
    source: S,
    state: LoadState,
}

impl<S: FeedSource> Provider<S> {
    pub fn new(source: S) -> Self {
        Self { source, state: LoadState::default() }
    }

    /// Returns the feed source
    pub fn source(&self) -> &S { &self.source }
    /// Returns the outcome of the last load
    pub fn state(&self) -> &LoadState { &self.state }

    /// Fetch the feed, and return the tasks that are upcoming as of `now`
    pub async fn load(&mut self, now: DateTime<Utc>) -> Result<Vec<Task>, Box<dyn Error>> {
        let content = self.fetch().await?;
        let tasks = load_tasks(&content, now);
        log::info!("Loaded {} upcoming tasks from {}", tasks.len(), self.source.location());
        self.state = LoadState::Loaded(tasks.clone());
        Ok(tasks)
    }

    /// Same as [`Self::load`], as of the current time
    pub async fn load_now(&mut self) -> Result<Vec<Task>, Box<dyn Error>> {
        self.load(Utc::now()).await
    }

    /// Fetch the feed, and return every task it contains, regardless of their dates
    pub async fn load_all(&mut self) -> Result<Vec<Task>, Box<dyn Error>> {
        let content = self.fetch().await?;
        let tasks = tasks_from_feed(&content);
        log::info!("Loaded {} tasks from {}", tasks.len(), self.source.location());
        self.state = LoadState::Loaded(tasks.clone());
        Ok(tasks)
    }

    async fn fetch(&mut self) -> Result<String, Box<dyn Error>> {
        log::info!("Loading feed from {}", self.source.location());
        match self.source.fetch_feed().await {
            Ok(content) => Ok(content),
            Err(err) => {
                log::warn!("Unable to fetch feed from {}: {}", self.source.location(), err);
                self.state = LoadState::Failed(err.to_string());
                Err(err)
            },
        }
    }
}
