use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nagar_core::chat::ChatLanguage;

mod commands;

#[derive(Parser)]
#[command(name = "nagar")]
#[command(about = "Nagarsathi CLI - municipal assistant tools", long_about = None)]
struct Cli {
    /// Log events as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the waste in an image file
    Classify {
        file: PathBuf,
        /// Reply language (english or hindi)
        #[arg(long, default_value = "english")]
        lang: ChatLanguage,
        /// Print the raw analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up a complaint by tracking ID
    Track {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Show which reply a chat message would get
    Route {
        text: String,
        #[arg(long, default_value = "english")]
        lang: ChatLanguage,
        /// Pretend an image is attached
        #[arg(long)]
        image: bool,
    },
    /// Print the effective configuration
    Config {
        /// Read this file instead of the platform config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    nagar_execution::logging::init_tracing("warn", cli.json_logs, None);

    match cli.command {
        Commands::Classify { file, lang, json } => {
            commands::classify::run(&file, lang, json).await?
        }
        Commands::Track { id, json } => commands::track::run(&id, json).await?,
        Commands::Route { text, lang, image } => commands::route::run(&text, lang, image),
        Commands::Config { path } => commands::config::run(path)?,
    }

    Ok(())
}
