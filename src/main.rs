#![forbid(unsafe_code)]
//! Folio Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::commands::{
    execute_check, execute_pages, execute_resolve, CheckOptions, PagesOptions, ResolveOptions,
};
use folio::ContentCategory;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - per-page content curation for portfolio sites")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site config file (.json, .yaml or .yml)
    #[arg(short, long, global = true, default_value = "site.yaml", env = "FOLIO_CONFIG")]
    config: PathBuf,

    /// Entry catalog file (.json, .yaml or .yml)
    #[arg(long, global = true, default_value = "catalog.json", env = "FOLIO_CATALOG")]
    catalog: PathBuf,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the entries a page displays
    Resolve {
        /// Page name as configured
        page: String,

        /// Only this category (projects, employment, education, volunteering, skills)
        #[arg(long)]
        category: Option<ContentCategory>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show why each entry is visible or not
        #[arg(long)]
        explain: bool,
    },

    /// List configured pages
    Pages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that every configured id still matches a catalog entry
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "folio=debug" } else { "folio=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            page,
            category,
            json,
            explain,
        } => {
            execute_resolve(ResolveOptions {
                page,
                category,
                config: cli.config,
                catalog: cli.catalog,
                json,
                explain,
            })?;
        }

        Commands::Pages { json } => {
            execute_pages(PagesOptions {
                config: cli.config,
                json,
            })?;
        }

        Commands::Check { json } => {
            execute_check(CheckOptions {
                config: cli.config,
                catalog: cli.catalog,
                json,
            })?;
        }
    }

    Ok(())
}
