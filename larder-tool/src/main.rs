mod config;
mod error;
mod form;
mod render;
mod session;

use clap::{Parser, Subcommand};
use larder_core::{GroceryCategory, ItemStore};
use larder_gemini::{DescriptionGenerator, GeminiClient};
use tracing::warn;

use crate::config::{load_config, Settings};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Record grocery items and draft their descriptions with Gemini", long_about = None)]
struct Cli {
    /// Gemini model used for descriptions
    #[arg(long, global = true)]
    model: Option<String>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in grocery items interactively (default)
    Session,

    /// Generate a description for a single item
    Describe {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Category label or key, e.g. "Dairy & Eggs" or dairy-eggs
        #[arg(short, long)]
        category: GroceryCategory,
    },

    /// List the available categories
    Categories,
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let settings = Settings::resolve(cli.model, load_config(), |var| std::env::var(var).ok());
    if settings.api_key.is_empty() {
        warn!("No Gemini API key found; set GEMINI_API_KEY to enable description generation");
    }

    let client = GeminiClient::with_base_url(settings.api_key, settings.base_url);
    let generator = DescriptionGenerator::with_model(client, settings.model);

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            let mut store = ItemStore::new();
            let stdin = std::io::stdin();
            session::run(&mut store, &generator, stdin.lock(), std::io::stdout()).await?;
        }
        Command::Describe { name, category } => {
            session::describe(&generator, &name, category, std::io::stdout()).await?;
        }
        Command::Categories => {
            for category in GroceryCategory::ALL {
                println!("{:<20} {}", category.key(), category);
            }
        }
    }

    Ok(())
}
