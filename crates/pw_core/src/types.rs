use serde::{Deserialize, Serialize};

/// A normalized article as the home page consumes it. Reconstructed on
/// every fetch; carries no identity beyond its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub snippet: Option<String>,
    pub source: String,
    pub thumbnail: String,
}

/// One member of congress as the politicians listing endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Politician {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub party: String,
    pub district: u32,
    pub url: String,
}

/// How the politicians page orders (and optionally groups) its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Name,
    State,
}

impl SortMode {
    /// Parses the `?sort=` query value; anything unrecognized falls back
    /// to the default name ordering.
    pub fn from_query(value: &str) -> Self {
        match value {
            "state" => SortMode::State,
            _ => SortMode::Name,
        }
    }
}
