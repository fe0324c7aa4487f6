//! This module provides a client to download an iCal feed from a web server

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::traits::FeedSource;


/// A feed source that downloads its data from a URL (e.g. a Canvas or Moodle calendar export)
pub struct Client {
    url: Url,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            // webcal:// is how many calendar exports are advertised, and is served over HTTPS
            "webcal" => {
                let https = url.as_str().replacen("webcal", "https", 1);
                Ok(Self { url: Url::parse(&https)? })
            },
            other => Err(format!("Unsupported URL scheme {:?} for feed {}", other, url).into()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for Client {
    async fn fetch_feed(&self) -> Result<String, Box<dyn Error>> {
        log::debug!("Fetching feed at {}", self.url);
        let res = reqwest::Client::new()
            .get(self.url.as_str())
            .header(ACCEPT, "text/calendar")
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?} for feed {}", res.status(), self.url).into());
        }

        let text = res.text().await?;
        Ok(text)
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_client_urls() {
        let client = Client::new("https://canvas.example.edu/feeds/calendars/user_abc.ics").unwrap();
        assert_eq!(client.url().host_str(), Some("canvas.example.edu"));

        let client = Client::new("webcal://canvas.example.edu/feeds/calendars/user_abc.ics").unwrap();
        assert_eq!(client.url().as_str(), "https://canvas.example.edu/feeds/calendars/user_abc.ics");

        assert!(Client::new("ftp://example.edu/feed.ics").is_err());
        assert!(Client::new("not a url").is_err());
    }
}
