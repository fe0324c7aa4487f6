//! A feed source that reads an `.ics` file from the disk

use std::error::Error;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::traits::FeedSource;

pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: &Path) -> Self {
        Self { path: PathBuf::from(path) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for LocalFile {
    async fn fetch_feed(&self) -> Result<String, Box<dyn Error>> {
        match tokio::fs::read_to_string(&self.path).await {
            Err(err) => Err(format!("Unable to open file {:?}: {}", self.path, err).into()),
            Ok(content) => Ok(content),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
