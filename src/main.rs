//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect the MDX content of a portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of a section, newest first
    #[command(alias = "ls")]
    List {
        /// Section to list (blog, work, ...)
        #[arg(default_value = "blog")]
        section: String,
    },

    /// Show one entry
    Show {
        /// Section the entry belongs to
        section: String,

        /// Entry slug (file name without extension)
        slug: String,
    },

    /// Format a date the way pages display it
    Date {
        /// Date such as 2026-02-24 or 2026-02-24T10:00:00Z
        input: String,

        /// Append how long ago the date was
        #[arg(short, long)]
        relative: bool,
    },

    /// Export a section as JSON
    Export {
        /// Section to export
        section: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configured sections
    Sections,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { section } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&folio, &section, &mut out)?;
        }

        Commands::Show { section, slug } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&folio, &section, &slug, &mut out)?;
        }

        Commands::Date { input, relative } => {
            folio::commands::date::run(&input, relative, &mut out)?;
        }

        Commands::Export { section, output } => {
            let folio = folio::Folio::new(&base_dir)?;
            tracing::info!("Exporting section {}", section);
            folio::commands::export::run(&folio, &section, output.as_deref(), &mut out)?;
        }

        Commands::Sections => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::sections::run(&folio, &mut out)?;
        }

        Commands::Version => {
            writeln!(out, "folio version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
