use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use streamscope_config::{ConfigLoad, DashboardConfig};
use streamscope_core::{
    FilterState,
    query::{ALL, YearRange},
};
use streamscope_model::Platform;
use tracing::warn;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "streamscopectl",
    version,
    about = "Explore streaming catalog exports from the command line"
)]
struct Cli {
    /// Configuration file; skips the environment/default file search
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every aggregate view for a catalog under the given filter
    Summary {
        #[command(flatten)]
        target: CatalogArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Include chart series (labels, values, colors) in JSON output
        #[arg(long)]
        charts: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the drill-down record for one title
    Title {
        #[command(flatten)]
        target: CatalogArgs,
        /// `show_id` of the title
        show_id: String,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the dropdown options available for a catalog
    Options {
        #[command(flatten)]
        target: CatalogArgs,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Compare platforms on the radar-chart metrics
    Compare {
        /// Always generate the synthetic dataset, even if a comparison
        /// source is configured
        #[arg(long, conflicts_with = "catalogs")]
        synthetic: bool,
        /// Compare the real Netflix, Hulu and Disney+ catalogs instead
        #[arg(long)]
        catalogs: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Titles generated per platform
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Write the synthetic comparison dataset as CSV
    Synth {
        #[arg(long)]
        seed: Option<u64>,
        /// Titles generated per platform
        #[arg(long)]
        count: Option<usize>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Clone)]
struct CatalogArgs {
    /// netflix, hulu, disney-plus or comparison
    #[arg(long, short)]
    platform: Platform,
    /// Path or URL overriding the configured source
    #[arg(long)]
    source: Option<String>,
}

#[derive(Args, Clone)]
struct FilterArgs {
    /// Movie, TV Show or All
    #[arg(long = "type", default_value = ALL)]
    kind: String,
    #[arg(long, default_value = ALL)]
    genre: String,
    /// Release year
    #[arg(long, default_value = ALL)]
    year: String,
    /// Case-insensitive substring of the title
    #[arg(long, default_value = "")]
    search: String,
    /// Release-year zoom window, e.g. `1990..2000`
    #[arg(long, value_parser = YearRange::parse)]
    range: Option<YearRange>,
    #[arg(long, default_value = ALL)]
    rating: String,
    #[arg(long, default_value = ALL)]
    country: String,
}

impl From<FilterArgs> for FilterState {
    fn from(args: FilterArgs) -> Self {
        FilterState::default()
            .with_kind(args.kind)
            .with_genre(args.genre)
            .with_year(args.year)
            .with_search(args.search)
            .with_year_range(args.range)
            .with_rating(args.rating)
            .with_country(args.country)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<ConfigLoad> {
    match explicit {
        Some(path) => DashboardConfig::load_explicit(path),
        None => DashboardConfig::load_from_env(),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let load = load_config(cli.config.as_ref())?;
    init_tracing(&load.config.logging.filter);
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }
    let config = load.config;

    match cli.command {
        Command::Summary {
            target,
            filter,
            charts,
            format,
        } => {
            commands::summary(&config, &target, filter.into(), charts, format)
                .await
        }
        Command::Title {
            target,
            show_id,
            format,
        } => commands::title(&config, &target, &show_id, format).await,
        Command::Options { target, format } => {
            commands::options(&config, &target, format).await
        }
        Command::Compare {
            synthetic,
            catalogs,
            seed,
            count,
            format,
        } => {
            let mode = if catalogs {
                commands::CompareMode::Catalogs
            } else if synthetic {
                commands::CompareMode::Synthetic
            } else {
                commands::CompareMode::Configured
            };
            let synth = commands::synth_settings(&config, seed, count);
            commands::compare(&config, mode, synth, format).await
        }
        Command::Synth { seed, count, out } => {
            let synth = commands::synth_settings(&config, seed, count);
            commands::synth(synth, out.as_deref())
        }
    }
}
