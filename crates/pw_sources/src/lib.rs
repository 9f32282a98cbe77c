pub mod directory;
pub mod members;
pub mod news;

pub use directory::{MemberDirectory, MemberSource};
pub use members::MembersClient;
pub use news::NewsClient;

pub mod prelude {
    pub use super::{MemberDirectory, MemberSource, MembersClient, NewsClient};
    pub use pw_core::{Article, Error, Politician, Result};
}
