use std::path::PathBuf;
use std::process::ExitCode;

use additive_check::config::load_config;
use additive_check::render::{render_results, render_table};
use additive_check::{AnalysisSession, ImageSource};
use clap::Parser;
use log::{debug, error};
use tokio::io::AsyncReadExt;

/// Check ingredient lists against EU food additive rules
#[derive(Parser, Debug)]
#[command(name = "additive-check", version, about)]
struct Args {
    /// Ingredients, comma- or newline-separated (read from stdin when omitted)
    #[arg(short, long, conflicts_with = "image")]
    text: Option<String>,

    /// Photo of an ingredients label
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Print a Markdown table instead of a list
    #[arg(long)]
    table: bool,

    /// Configuration file (defaults to additive-check.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("{:#?}", config);

    let mut session = match AnalysisSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match args.image {
        Some(path) => session.submit_image(&ImageSource::Path(path)).await,
        None => {
            let text = match args.text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    if let Err(e) = tokio::io::stdin().read_to_string(&mut buffer).await {
                        eprintln!("Failed to read stdin: {}", e);
                        return ExitCode::FAILURE;
                    }
                    buffer
                }
            };
            session.set_input(text);
            session.submit_text().await
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("{}", session.error().unwrap_or_else(|| e.user_message()));
        return ExitCode::FAILURE;
    }

    if args.table {
        println!("{}", render_table(session.results()));
    } else {
        print!("{}", render_results(session.results()));
    }

    ExitCode::SUCCESS
}
