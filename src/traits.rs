use std::error::Error;

use async_trait::async_trait;

/// Something that can provide the full text of an iCal feed
#[async_trait]
pub trait FeedSource {
    /// Returns the whole content of the feed.
    /// This function may be slow, or may fail (e.g. in case of a remote server)
    async fn fetch_feed(&self) -> Result<String, Box<dyn Error>>;

    /// A human-readable description of where the feed comes from (used in logs)
    fn location(&self) -> String;
}
