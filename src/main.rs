use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedfilter", version, about = "Pull headlines from web pages and Inoreader folders and filter them by keyword")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract headings from a web page and filter them by keyword
    Scrape {
        /// Page to scrape (prompted for when omitted)
        #[arg(long)]
        url: Option<String>,

        /// Comma-separated keywords (prompted for when omitted)
        #[arg(long)]
        keywords: Option<String>,

        /// Maximum number of headings to extract
        #[arg(long, default_value_t = feedfilter::scrape::DEFAULT_LIMIT)]
        limit: usize,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Fetch articles from an Inoreader folder and filter titles by keyword
    Feed {
        /// Folder number or name (prompted for when omitted)
        #[arg(long)]
        folder: Option<String>,

        /// Comma-separated keywords (prompted for when omitted)
        #[arg(long)]
        keywords: Option<String>,

        /// Number of articles to fetch
        #[arg(long, default_value_t = 20)]
        count: usize,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Authorize with Inoreader and store the tokens
    Auth,

    /// List the folders available to the feed command
    Folders,
}

impl Commands {
    fn json(&self) -> bool {
        match self {
            Commands::Scrape { json, .. } | Commands::Feed { json, .. } => *json,
            _ => false,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("FEEDFILTER_LOG_LEVEL")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.command.json();

    let result = run(cli).await;
    if let Err(e) = result {
        feedfilter::cli::output::print_error(&e, json);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), feedfilter::FeedFilterError> {
    match cli.command {
        Commands::Scrape {
            url,
            keywords,
            limit,
            json,
        } => {
            let timeout = feedfilter::config::request_timeout(|name| std::env::var(name).ok())?;
            feedfilter::cli::scrape::run_scrape(url, keywords, limit, json, timeout).await
        }
        Commands::Feed {
            folder,
            keywords,
            count,
            json,
        } => {
            let config = feedfilter::load_config()?;
            feedfilter::cli::feed::run_feed(&config, folder, keywords, count, json).await
        }
        Commands::Auth => {
            let config = feedfilter::load_config()?;
            feedfilter::cli::auth::run_auth(&config).await
        }
        Commands::Folders => {
            feedfilter::cli::feed::run_folders();
            Ok(())
        }
    }
}
