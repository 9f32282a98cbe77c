use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pw_core::{Politician, Result};

/// Read side of a members directory.
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Full listing, optionally narrowed to one state.
    async fn list(&self, state: Option<&str>) -> Result<Vec<Politician>>;

    /// Lookup by id.
    async fn get(&self, id: i64) -> Result<Option<Politician>>;
}

/// In-memory members directory backing the local listing service.
pub struct MemberDirectory {
    members: Arc<RwLock<Vec<Politician>>>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self::with_members(Vec::new())
    }

    pub fn with_members(members: Vec<Politician>) -> Self {
        Self {
            members: Arc::new(RwLock::new(members)),
        }
    }

    /// Loads a directory from a JSON array of members.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::with_members(serde_json::from_str(&data)?))
    }

    /// A small built-in roster for running the service without a seed file.
    pub fn sample() -> Self {
        Self::with_members(vec![
            member(1, "Nancy Pelosi", "CA", "Democratic", 11, "P000197"),
            member(2, "Kevin Kiley", "CA", "Republican", 3, "K000401"),
            member(3, "Alexandria Ocasio-Cortez", "NY", "Democratic", 14, "O000172"),
            member(4, "Nick Langworthy", "NY", "Republican", 23, "L000600"),
            member(5, "Jodey Arrington", "TX", "Republican", 19, "A000375"),
            member(6, "Greg Casar", "TX", "Democratic", 35, "C001131"),
        ])
    }

    /// Inserts a member, replacing any existing entry with the same id.
    pub async fn insert(&self, politician: Politician) {
        let mut members = self.members.write().await;
        match members.iter_mut().find(|m| m.id == politician.id) {
            Some(existing) => *existing = politician,
            None => members.push(politician),
        }
    }

    pub async fn len(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberSource for MemberDirectory {
    async fn list(&self, state: Option<&str>) -> Result<Vec<Politician>> {
        let members = self.members.read().await;
        Ok(match state {
            Some(state) => members.iter().filter(|m| m.state == state).cloned().collect(),
            None => members.clone(),
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Politician>> {
        let members = self.members.read().await;
        Ok(members.iter().find(|m| m.id == id).cloned())
    }
}

fn member(id: i64, name: &str, state: &str, party: &str, district: u32, bioguide: &str) -> Politician {
    Politician {
        id,
        name: name.to_string(),
        state: state.to_string(),
        party: party.to_string(),
        district,
        url: format!("https://www.congress.gov/member/{}", bioguide),
    }
}
