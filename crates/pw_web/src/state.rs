use std::sync::Arc;

use pw_core::Config;
use pw_sources::{MemberSource, MembersClient, NewsClient};

/// Shared state of the site router.
pub struct AppState {
    pub news: NewsClient,
    pub members: MembersClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            news: NewsClient::new(config.news_api_key.clone(), config.revalidate()),
            members: MembersClient::new(&config.members_api_url),
        }
    }
}

/// Shared state of the members API router.
pub struct ApiState {
    pub directory: Arc<dyn MemberSource>,
}

impl ApiState {
    pub fn new(directory: Arc<dyn MemberSource>) -> Self {
        Self { directory }
    }
}
