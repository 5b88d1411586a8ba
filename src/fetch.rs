use crate::error::MonitorError;

/// Page retrieval seam. The monitor loop and the extractor only see this
/// trait, so tests can serve canned HTML instead of hitting the site.
#[async_trait::async_trait]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<String, MonitorError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> HttpFetcher {
        HttpFetcher {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, MonitorError> {
        Ok(self.client.get(url).send().await?.text().await?)
    }
}
