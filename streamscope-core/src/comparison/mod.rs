//! Cross-platform comparison (radar chart feed).

pub mod synth;

use std::collections::HashSet;

use serde::Serialize;
use streamscope_model::{Platform, Title};
use tracing::warn;

use crate::ingest::Catalog;

pub use synth::{synthesize, write_csv};

/// Window, in years before the newest release, that counts as "recent".
pub const RECENT_WINDOW: u16 = 5;

/// Radar-chart axes for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformMetrics {
    pub platform: Platform,
    pub total_titles: usize,
    /// Fraction of titles that are movies, `0.0..=1.0`.
    pub movie_share: f64,
    /// Mean runtime of movies with a known runtime.
    pub mean_movie_minutes: f64,
    /// Mean season count of shows with a known count.
    pub mean_seasons: f64,
    /// Distinct canonical genres.
    pub genre_diversity: usize,
    /// Fraction released within [`RECENT_WINDOW`] years of the newest title
    /// across every compared catalog.
    pub recent_share: f64,
}

/// Metrics per catalog, in input order.
pub fn compare(catalogs: &[Catalog]) -> Vec<PlatformMetrics> {
    let newest = catalogs
        .iter()
        .flat_map(|catalog| catalog.titles.iter())
        .map(|title| title.release_year)
        .max()
        .unwrap_or(0);

    catalogs
        .iter()
        .map(|catalog| metrics(catalog.platform, &catalog.titles, newest))
        .collect()
}

fn metrics(
    platform: Platform,
    titles: &[Title],
    newest: u16,
) -> PlatformMetrics {
    let total = titles.len();
    let movies = titles.iter().filter(|title| title.is_movie()).count();
    let recent_from = newest.saturating_sub(RECENT_WINDOW);
    let recent = titles
        .iter()
        .filter(|title| {
            newest != 0
                && title.release_year != 0
                && title.release_year >= recent_from
        })
        .count();

    PlatformMetrics {
        platform,
        total_titles: total,
        movie_share: ratio(movies, total),
        mean_movie_minutes: mean(
            titles.iter().filter_map(|title| title.duration.minutes_value()),
        ),
        mean_seasons: mean(
            titles.iter().filter_map(|title| title.duration.seasons_value()),
        ),
        genre_diversity: titles
            .iter()
            .map(|title| title.genre.as_str())
            .collect::<HashSet<_>>()
            .len(),
        recent_share: ratio(recent, total),
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    let (sum, count) = values
        .fold((0u64, 0usize), |(sum, count), v| {
            (sum + u64::from(v), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Regroup the synthetic comparison catalog by the platform prefix of each
/// id (`netflix:12`). Titles without a recognised prefix are dropped with a
/// warning.
pub fn split_by_platform(catalog: &Catalog) -> Vec<Catalog> {
    let split: Vec<Catalog> = Platform::streaming()
        .iter()
        .map(|platform| {
            let titles = catalog
                .titles
                .iter()
                .filter(|title| {
                    title
                        .show_id
                        .split_once(':')
                        .is_some_and(|(prefix, _)| prefix == platform.slug())
                })
                .cloned()
                .collect();
            Catalog::new(*platform, titles)
        })
        .collect();

    let kept: usize = split.iter().map(Catalog::len).sum();
    let dropped = catalog.len() - kept;
    if dropped > 0 {
        warn!(
            dropped,
            total = catalog.len(),
            "comparison titles without a platform id prefix were dropped"
        );
    }
    split
}
