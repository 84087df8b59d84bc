use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use setlist_core::filter::{SortMode, ViewMode};
use tracing::{debug, info};

mod app;

#[derive(Parser, Debug)]
#[command(author, version, about = "setlist - browse and export the band's song catalog", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog grouped by section
    List {
        /// Filter by title or artist
        #[arg(short, long)]
        search: Option<String>,

        /// popularity, alphabetical, decade or newest
        #[arg(long)]
        sort: Option<SortMode>,

        /// Switch and remember the view mode (list or grid)
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// Show or change which sections are collapsed
    Sections {
        /// Section name to toggle, e.g. "Latin"
        #[arg(short, long)]
        toggle: Vec<String>,

        #[arg(long, conflicts_with = "collapse_all")]
        expand_all: bool,

        #[arg(long)]
        collapse_all: bool,
    },

    /// Export a set of favorites
    Export {
        /// Song ids, comma separated or repeated
        #[arg(short, long, value_delimiter = ',', required = true)]
        favorite: Vec<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },

    /// Build the contact link for a set of favorites, optionally submitting
    /// an inquiry
    Inquiry {
        #[arg(short, long, value_delimiter = ',')]
        favorite: Vec<String>,

        #[command(flatten)]
        form: app::FormArgs,

        /// Submit the inquiry through the notification sender
        #[arg(long)]
        send: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Text,
    Csv,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        setlist_core::config::Config::load_from_path(config_path)?
    } else {
        setlist_core::config::Config::load_or_default()
    };

    // Initialize logging
    let log_level = if args.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting setlist v{}", env!("CARGO_PKG_VERSION"));
    debug!("Preferences file: {}", config.general.preferences_file);

    match args.command {
        Command::List { search, sort, view } => app::list(&config, search, sort, view)?,
        Command::Sections {
            toggle,
            expand_all,
            collapse_all,
        } => app::sections(&config, &toggle, expand_all, collapse_all)?,
        Command::Export {
            favorite,
            format,
            output,
        } => app::export(&config, &favorite, format == ExportFormat::Csv, output).await?,
        Command::Inquiry {
            favorite,
            form,
            send,
        } => app::inquiry(&config, &favorite, form, send).await?,
    }

    Ok(())
}
