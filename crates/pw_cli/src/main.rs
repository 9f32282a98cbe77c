use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use pw_core::{Config, Result};
use pw_sources::news::NEWS_ENDPOINT;
use pw_sources::{MemberDirectory, MembersClient, NewsClient};
use pw_web::{ApiState, AppState};

#[derive(Parser, Debug)]
#[command(name = "pw", author, version, about = "PoliWatch news/politics site", long_about = None)]
struct Cli {
    /// Override the politicians listing endpoint (defaults to MEMBERS_API_URL)
    #[arg(long)]
    members_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the website
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
    },
    /// Serve the members listing API
    MembersApi {
        #[arg(long, default_value = "127.0.0.1:3001")]
        bind: String,
        /// Seed the directory from a JSON file instead of the built-in roster
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Fetch and print the current headlines
    Headlines,
    /// Print the politicians listing
    Members {
        /// Narrow the listing to one state
        #[arg(long)]
        state: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = cli.members_url {
        config.members_api_url = url;
    }

    match cli.command {
        Commands::Serve { bind } => {
            if config.news_api_key.is_none() {
                info!("⚠️ NEWS_API_KEY is not set; the home page will render empty");
            }
            let app = pw_web::create_app(AppState::new(&config)).await;
            pw_web::serve(&bind, app).await?;
        }
        Commands::MembersApi { bind, seed } => {
            let directory = match seed {
                Some(path) => MemberDirectory::from_json_file(&path)?,
                None => MemberDirectory::sample(),
            };
            info!("🏛️ Members directory loaded ({} members)", directory.len().await);
            let app = pw_web::create_members_api(ApiState::new(Arc::new(directory))).await;
            pw_web::serve(&bind, app).await?;
        }
        Commands::Headlines => {
            let news = NewsClient::new(config.news_api_key.clone(), config.revalidate());
            println!("Fetching articles from {}", NEWS_ENDPOINT);
            let articles = news.articles().await?;
            println!("Found {} articles", articles.len());
            for article in articles {
                println!("- {}", article.title);
            }
        }
        Commands::Members { state } => {
            let members = MembersClient::new(&config.members_api_url);
            let mut politicians = members.politicians().await?;
            if let Some(state) = state {
                politicians.retain(|p| p.state == state);
            }
            println!("Found {} members", politicians.len());
            for p in politicians {
                println!("{} ({}, {}-{})", p.name, p.party, p.state, p.district);
            }
        }
    }

    Ok(())
}
