use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use binbuddy_core::{
    capture_and_classify, list_photos, Config, FilePhoto, Prompt, RemoteClassifier, RewardsLedger,
};
use binbuddy_tui::App;

#[derive(Parser)]
#[command(name = "binbuddy")]
#[command(version, about = "Terminal-based recycling assistant", long_about = None)]
struct Cli {
    /// Classifier endpoint, overriding the config file
    #[arg(long, global = true, env = "BINBUDDY_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Classify one photo without entering the TUI
    Scan {
        /// Photo to classify; picked from the photos directory when omitted
        image: Option<PathBuf>,
    },
    /// Show or update the saved configuration
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,
        /// Save a new classifier endpoint to the config file
        #[arg(long, value_name = "URL")]
        set_endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binbuddy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        // Flag or BINBUDDY_ENDPOINT wins over the file
        config.endpoint.url = endpoint;
    }

    match cli.command {
        Some(Commands::Scan { image }) => run_scan(&config, image).await,
        Some(Commands::Config { show, set_endpoint }) => run_config(config, show, set_endpoint),
        None => {
            tracing::info!(endpoint = %config.endpoint.url, "starting TUI");
            let classifier = RemoteClassifier::new(config.endpoint.url.clone());
            let app = App::new(RewardsLedger::new(), classifier.endpoint().to_string());
            binbuddy_tui::run_tui(app, classifier, config.photos.dir.clone()).await
        }
    }
}

/// One scan, no TUI: classify the photo, ask the condition question, print
/// the advice.
async fn run_scan(config: &Config, image: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match image {
        Some(path) => path,
        None => pick_photo(&config.photos.dir)?,
    };

    tracing::info!(photo = %path.display(), endpoint = %config.endpoint.url, "scanning");

    let source = FilePhoto::new(&path);
    let classifier = RemoteClassifier::new(config.endpoint.url.clone());
    let mut ledger = RewardsLedger::new();

    let outcome = match capture_and_classify(&source, &classifier, &mut ledger).await {
        Ok(outcome) => outcome,
        // Same wording the in-app alerts use
        Err(err) => anyhow::bail!("{err}"),
    };

    println!("{}", outcome.result.summary());

    match &outcome.prompt {
        Prompt::Question { text, .. } => {
            let yes = dialoguer::Confirm::new().with_prompt(*text).interact()?;
            println!("{}", outcome.prompt.answer(yes));
        }
        Prompt::Terminal { text } => println!("{text}"),
    }

    println!(
        "Points: {} | Items Scanned: {}",
        ledger.points(),
        ledger.items_scanned()
    );

    Ok(())
}

/// Pick a photo from the configured directory, newest first.
fn pick_photo(dir: &Path) -> anyhow::Result<PathBuf> {
    let photos = list_photos(dir)?;
    if photos.is_empty() {
        anyhow::bail!("No photos found in {}", dir.display());
    }

    let names: Vec<String> = photos
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect();

    let picked = dialoguer::Select::new()
        .with_prompt("Pick a photo")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(photos[picked].clone())
}

/// Show or update the saved configuration.
fn run_config(mut config: Config, show: bool, set_endpoint: Option<String>) -> anyhow::Result<()> {
    let saved = if let Some(url) = set_endpoint {
        config.endpoint.url = url.trim_end_matches('/').to_string();
        config.save()?;
        println!("Endpoint saved: {}", config.endpoint.url);
        true
    } else {
        false
    };

    if show || !saved {
        println!("endpoint.url = {}", config.endpoint.url);
        println!("photos.dir   = {}", config.photos.dir.display());
        println!("config file  = {}", Config::config_path()?.display());
    }

    Ok(())
}
