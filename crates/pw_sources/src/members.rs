use tracing::debug;

use pw_core::{Politician, Result};

/// Client for the politicians listing service. One GET per page render,
/// no cache, no retry.
pub struct MembersClient {
    client: reqwest::Client,
    base_url: String,
}

impl MembersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn politicians(&self) -> Result<Vec<Politician>> {
        let url = self.listing_url();
        debug!("Fetching politicians from {}", url);

        let politicians = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(politicians)
    }

    fn listing_url(&self) -> String {
        format!("{}/politicians", self.base_url)
    }
}
