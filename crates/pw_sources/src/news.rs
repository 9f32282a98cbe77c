use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

use pw_core::{Article, Error, Result};

pub const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const NEWS_QUERY: &str = "politics OR election OR government";
pub const DEFAULT_THUMBNAIL: &str = "/images/default.jpg";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire shape of the upstream search response. Every field is optional;
/// the mapping decides what survives.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    source: Option<RawSource>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

struct CachedArticles {
    fetched_at: Instant,
    articles: Vec<Article>,
}

/// Client for the third-party article search endpoint.
///
/// One fixed query (topic filter, English, newest first) plus the
/// credential; responses are reused for the revalidation window before the
/// next caller triggers a refetch. An absent credential is sent as an empty
/// `apiKey` and simply fails upstream.
pub struct NewsClient {
    client: reqwest::Client,
    api_key: Option<String>,
    revalidate: Duration,
    cache: Arc<RwLock<Option<CachedArticles>>>,
}

impl NewsClient {
    pub fn new(api_key: Option<String>, revalidate: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("poliwatch/", env!("CARGO_PKG_VERSION")))
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            revalidate,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// The mapped article list, served from cache while it is inside the
    /// revalidation window.
    pub async fn articles(&self) -> Result<Vec<Article>> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.revalidate {
                    debug!("Reusing cached articles ({} items)", cached.articles.len());
                    return Ok(cached.articles.clone());
                }
            }
        }

        let articles = self.fetch_articles().await?;
        let mut cache = self.cache.write().await;
        *cache = Some(CachedArticles {
            fetched_at: Instant::now(),
            articles: articles.clone(),
        });
        Ok(articles)
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let url = self.search_url()?;
        info!("Fetching articles from {}", NEWS_ENDPOINT);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: SearchResponse = response.json().await?;
        let articles: Vec<Article> = body.articles.into_iter().filter_map(map_article).collect();

        info!("Found {} articles", articles.len());
        Ok(articles)
    }

    fn search_url(&self) -> Result<Url> {
        let api_key = self.api_key.as_deref().unwrap_or("");
        Url::parse_with_params(
            NEWS_ENDPOINT,
            &[
                ("q", NEWS_QUERY),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("apiKey", api_key),
            ],
        )
        .map_err(|e| Error::InvalidUrl(e.to_string()))
    }
}

/// Maps one raw item to the normalized shape. Items with no title or link
/// are dropped; the optional fields fall back per field (empty source,
/// absent snippet, stock thumbnail).
fn map_article(raw: RawArticle) -> Option<Article> {
    let title = raw.title?;
    let link = raw.url?;
    Some(Article {
        title,
        link,
        snippet: raw.description,
        source: raw.source.and_then(|s| s.name).unwrap_or_default(),
        thumbnail: raw
            .url_to_image
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string()),
    })
}
