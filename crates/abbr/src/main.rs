//! abbr CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "abbr")]
#[command(version)]
#[command(about = "Expand Markdown abbreviation definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown file with its abbreviations expanded
    Render {
        /// Input file (reads stdin when omitted or '-')
        input: Option<String>,

        /// Output format (html, json)
        #[arg(short = 't', long)]
        to: Option<String>,

        /// Write output to FILE (stdout when omitted or '-')
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Suppress informational messages
        #[arg(long)]
        quiet: bool,
    },

    /// List the abbreviation definitions of a Markdown file
    List {
        /// Input file (reads stdin when omitted or '-')
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abbr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            to,
            output,
            quiet,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            to,
            output,
            quiet,
        }),
        Commands::List { input } => commands::list::execute(commands::list::ListArgs { input }),
    }
}
