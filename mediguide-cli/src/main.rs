//! MediGuide CLI - Main Entry Point
//!
//! Classifies a free-text medical answer and reveals it fragment by
//! fragment, the way the Ask MediGuide page does.
//!
//! Usage:
//!     mediguide --question "I have a fever" --response "Take paracetamol tablet for fever."
//!     mediguide --ask-json reply.json --format html
//!     echo "Drink plenty of fluids and rest." | mediguide --delay-ms 100

mod input;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mediguide::sink::TerminalSink;
use mediguide::tracing::prefix;
use mediguide::{reveal_once, Settings};
use mediguide_core::{render_html, summarize, Fragment};
use serde::Serialize;
use tokio::signal;
use tracing::{debug, info};

use crate::input::InputSources;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Paced reveal on the terminal
    Text,
    /// Action-item HTML markup, all at once
    Html,
    /// Classified fragments and per-category counts
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mediguide")]
#[command(about = "Classify a medical answer and reveal it step by step")]
#[command(version)]
struct Args {
    /// Question the answer responds to
    #[arg(short, long)]
    question: Option<String>,

    /// Answer text (reads stdin when no source is given)
    #[arg(short, long)]
    response: Option<String>,

    /// Read the answer text from a file (`-` for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Read an ask reply `{"question": ..., "response": ...}` (`-` for stdin)
    #[arg(long)]
    ask_json: Option<PathBuf>,

    /// Settings file (defaults to $MEDIGUIDE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between revealed fragments in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    question: &'a str,
    fragments: &'a [Fragment],
    summary: mediguide_core::ClassifySummary,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?.with_delay_ms(args.delay_ms);
    settings.validate()?;

    let filter = args
        .log_level
        .as_deref()
        .or(settings.log_filter.as_deref())
        .unwrap_or("warn");
    mediguide::tracing::init_with_filter(filter);

    debug!(
        "{} mediguide v{} starting",
        prefix::OPEN,
        env!("CARGO_PKG_VERSION")
    );

    let reply = input::resolve(&InputSources {
        ask_json: args.ask_json.as_deref(),
        response: args.response.as_deref(),
        file: args.file.as_deref(),
        question: args.question.as_deref(),
    })?;

    let fragments = reply.fragments();
    let summary = summarize(&fragments);
    info!(
        "{} {} fragments, {} actionable",
        prefix::CLASSIFY,
        summary.total,
        summary.actionable
    );

    match args.format {
        Format::Json => {
            let output = JsonOutput {
                question: &reply.question,
                fragments: &fragments,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Format::Html => {
            println!("{}", render_html(&fragments));
        }
        Format::Text => {
            if !reply.question.is_empty() {
                println!("Your Question:");
                println!("\"{}\"", reply.question);
                println!();
            }
            println!("MediGuide Response:");

            tokio::select! {
                result = reveal_once(TerminalSink::stdout(), settings.reveal, fragments) => {
                    result?;
                }
                _ = shutdown_signal() => {
                    info!("{} reveal interrupted", prefix::CLOSE);
                }
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, never resolve
    if signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
