use std::env;
use std::time::Duration;

pub const DEFAULT_MEMBERS_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

/// Runtime settings, read from the environment with defaults.
///
/// The news credential is deliberately not validated here: an absent key
/// produces a failed upstream call and an empty article list, nothing more.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub members_api_url: String,
    pub revalidate_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            news_api_key: env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            members_api_url: env::var("MEMBERS_API_URL")
                .unwrap_or_else(|_| DEFAULT_MEMBERS_API_URL.to_string()),
            revalidate_secs: env::var("NEWS_REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REVALIDATE_SECS),
        }
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}
