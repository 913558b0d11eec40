use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use streamscope_config::{DashboardConfig, SynthConfig};
use streamscope_core::{
    Catalog, Dashboard, DashboardSnapshot, FilterState,
    aggregate::ChartSeries,
    comparison::{self, PlatformMetrics},
    fetch::{CatalogSource, DefaultTransport, load_catalog},
};
use streamscope_model::Platform;
use tracing::info;

use crate::{CatalogArgs, OutputFormat, report};

/// Which datasets `compare` reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Configured comparison source, or the synthetic dataset if none is set.
    Configured,
    Synthetic,
    Catalogs,
}

pub fn synth_settings(
    config: &DashboardConfig,
    seed: Option<u64>,
    count: Option<usize>,
) -> SynthConfig {
    SynthConfig {
        seed: seed.unwrap_or(config.synth.seed),
        per_platform: count.unwrap_or(config.synth.per_platform),
    }
}

fn resolve_source(
    config: &DashboardConfig,
    platform: Platform,
    overridden: Option<&str>,
) -> Result<Option<CatalogSource>> {
    match overridden {
        Some(raw) => raw
            .parse::<CatalogSource>()
            .map(Some)
            .with_context(|| format!("invalid source {raw:?}")),
        None => config.sources.catalog_source(platform),
    }
}

async fn fetch_catalog(
    config: &DashboardConfig,
    platform: Platform,
    source: &CatalogSource,
) -> Result<Catalog> {
    let transport = DefaultTransport::new(config.http.timeout())?;
    load_catalog(&transport, platform, source, &config.retry.to_policy())
        .await
        .with_context(|| format!("could not load the {platform} catalog"))
}

/// Load a platform's catalog. The comparison platform falls back to the
/// synthetic dataset when it has no source.
async fn open_catalog(
    config: &DashboardConfig,
    target: &CatalogArgs,
) -> Result<Catalog> {
    match resolve_source(config, target.platform, target.source.as_deref())? {
        Some(source) => fetch_catalog(config, target.platform, &source).await,
        None if target.platform == Platform::Comparison => {
            info!(
                seed = config.synth.seed,
                per_platform = config.synth.per_platform,
                "no comparison source configured, synthesizing"
            );
            Ok(comparison::synthesize(
                config.synth.seed,
                config.synth.per_platform,
            ))
        }
        None => Err(anyhow!("no source configured for {}", target.platform)),
    }
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    #[serde(flatten)]
    snapshot: &'a DashboardSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    charts: Option<Vec<ChartSeries>>,
}

pub async fn summary(
    config: &DashboardConfig,
    target: &CatalogArgs,
    filter: FilterState,
    charts: bool,
    format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config, target).await?;
    let mut dashboard = Dashboard::with_top_n(catalog, config.dashboard.top_n);
    dashboard.set_filter(filter);
    let snapshot = dashboard.snapshot();

    match format {
        OutputFormat::Json => print_json(&SummaryOutput {
            snapshot,
            charts: charts.then(|| snapshot.charts()),
        }),
        OutputFormat::Text => {
            with_stdout(|out| report::write_snapshot(out, snapshot))
        }
    }
}

pub async fn title(
    config: &DashboardConfig,
    target: &CatalogArgs,
    show_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config, target).await?;
    let dashboard = Dashboard::with_top_n(catalog, config.dashboard.top_n);
    let detail = dashboard.title_detail(show_id).ok_or_else(|| {
        anyhow!(
            "no title with id {show_id:?} in the {} catalog",
            target.platform
        )
    })?;

    match format {
        OutputFormat::Json => print_json(&detail),
        OutputFormat::Text => {
            with_stdout(|out| report::write_detail(out, &detail))
        }
    }
}

pub async fn options(
    config: &DashboardConfig,
    target: &CatalogArgs,
    format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config, target).await?;
    let dashboard = Dashboard::with_top_n(catalog, config.dashboard.top_n);

    match format {
        OutputFormat::Json => print_json(dashboard.options()),
        OutputFormat::Text => {
            with_stdout(|out| report::write_options(out, dashboard.options()))
        }
    }
}

pub async fn compare(
    config: &DashboardConfig,
    mode: CompareMode,
    synth: SynthConfig,
    format: OutputFormat,
) -> Result<()> {
    let configured = match mode {
        CompareMode::Configured => {
            config.sources.catalog_source(Platform::Comparison)?
        }
        CompareMode::Synthetic | CompareMode::Catalogs => None,
    };

    let catalogs = if mode == CompareMode::Catalogs {
        let mut catalogs = Vec::with_capacity(Platform::streaming().len());
        for platform in Platform::streaming() {
            let source = config
                .sources
                .catalog_source(*platform)?
                .ok_or_else(|| anyhow!("no source configured for {platform}"))?;
            catalogs.push(fetch_catalog(config, *platform, &source).await?);
        }
        catalogs
    } else if let Some(source) = configured {
        let combined =
            fetch_catalog(config, Platform::Comparison, &source).await?;
        comparison::split_by_platform(&combined)
    } else {
        let combined = comparison::synthesize(synth.seed, synth.per_platform);
        comparison::split_by_platform(&combined)
    };

    let metrics: Vec<PlatformMetrics> = comparison::compare(&catalogs);
    match format {
        OutputFormat::Json => print_json(&metrics),
        OutputFormat::Text => {
            with_stdout(|out| report::write_comparison(out, &metrics))
        }
    }
}

pub fn synth(synth: SynthConfig, out: Option<&Path>) -> Result<()> {
    let catalog = comparison::synthesize(synth.seed, synth.per_platform);
    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("failed to create {}", path.display())
            })?;
            comparison::write_csv(&catalog, BufWriter::new(file))?;
            info!(
                path = %path.display(),
                titles = catalog.len(),
                "synthetic comparison dataset written"
            );
        }
        None => comparison::write_csv(&catalog, io::stdout().lock())?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    with_stdout(|out| {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)
    })
}

fn with_stdout<F>(render: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out)?;
    out.flush()?;
    Ok(())
}
