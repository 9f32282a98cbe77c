pub mod config;
pub mod error;
pub mod types;
pub mod view;

pub use config::Config;
pub use error::Error;
pub use types::{Article, Politician, SortMode};

pub type Result<T> = std::result::Result<T, Error>;
