//! Plain-text rendering of dashboard views.

use std::io::{self, Write};

use streamscope_core::{
    DashboardSnapshot, FilterState, TitleDetail,
    aggregate::{CategoryCounts, YearPoint},
    comparison::PlatformMetrics,
    query::{FilterOptions, is_all},
};

const LABEL_WIDTH: usize = 28;

pub fn write_snapshot<W: Write + ?Sized>(
    out: &mut W,
    snapshot: &DashboardSnapshot,
) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} of {} titles",
        snapshot.platform, snapshot.filtered_titles, snapshot.total_titles
    )?;
    if !snapshot.filter.is_unconstrained() {
        writeln!(out, "Filter: {}", describe_filter(&snapshot.filter))?;
    }

    write_counts(out, "Type", &snapshot.kind_counts)?;
    write_counts(out, "Genre", &snapshot.genre_counts)?;
    write_counts(out, "Rating", &snapshot.rating_counts)?;
    write_counts(out, "Country", &snapshot.country_counts)?;

    writeln!(out, "\nDuration")?;
    for bucket in &snapshot.duration_buckets {
        writeln!(out, "  {:<LABEL_WIDTH$}{:>6}", bucket.label, bucket.count)?;
    }

    write_timeline(out, "Release years", &snapshot.yearly_growth)?;
    write_timeline(out, "Added per year", &snapshot.additions_by_year)
}

fn describe_filter(filter: &FilterState) -> String {
    let mut parts = Vec::new();
    for (name, value) in [
        ("type", &filter.kind),
        ("genre", &filter.genre),
        ("year", &filter.year),
        ("rating", &filter.rating),
        ("country", &filter.country),
    ] {
        if !is_all(value) {
            parts.push(format!("{name}={}", value.trim()));
        }
    }
    if !filter.search.trim().is_empty() {
        parts.push(format!("search={:?}", filter.search.trim()));
    }
    if let Some(range) = filter.year_range {
        parts.push(format!("range={}..={}", range.start, range.end));
    }
    parts.join(" ")
}

fn write_counts<W: Write + ?Sized>(
    out: &mut W,
    heading: &str,
    counts: &CategoryCounts,
) -> io::Result<()> {
    writeln!(out, "\n{heading}")?;
    if counts.is_empty() {
        return writeln!(out, "  (none)");
    }
    for entry in counts.entries() {
        writeln!(out, "  {:<LABEL_WIDTH$}{:>6}", entry.label, entry.count)?;
    }
    Ok(())
}

fn write_timeline<W: Write + ?Sized>(
    out: &mut W,
    heading: &str,
    points: &[YearPoint],
) -> io::Result<()> {
    writeln!(out, "\n{heading}")?;
    if points.is_empty() {
        return writeln!(out, "  (none)");
    }
    for point in points {
        let year = if point.year == 0 {
            "unknown".to_string()
        } else {
            point.year.to_string()
        };
        writeln!(
            out,
            "  {year:<8}{:>6}  total {:>6}  {:+.1}%",
            point.count, point.cumulative, point.growth
        )?;
    }
    Ok(())
}

pub fn write_detail<W: Write + ?Sized>(
    out: &mut W,
    detail: &TitleDetail,
) -> io::Result<()> {
    let title = &detail.title;
    writeln!(out, "{} ({})", title.title, title.show_id)?;
    writeln!(out, "  Type:      {}", title.kind.label())?;
    writeln!(out, "  Genres:    {}", title.genres.join(", "))?;
    if title.release_year == 0 {
        writeln!(out, "  Released:  unknown")?;
    } else {
        writeln!(out, "  Released:  {}", title.release_year)?;
    }
    writeln!(out, "  Rating:    {}", title.rating)?;
    writeln!(out, "  Duration:  {}", detail.duration_label)?;
    writeln!(out, "  Countries: {}", title.countries.join(", "))?;
    match detail.added_on {
        Some(date) => {
            writeln!(out, "  Added:     {}", date.format("%Y-%m-%d"))?
        }
        None => writeln!(out, "  Added:     {}", title.date_added)?,
    }
    writeln!(out, "\n{}", title.description)
}

pub fn write_options<W: Write + ?Sized>(
    out: &mut W,
    options: &FilterOptions,
) -> io::Result<()> {
    for (name, values) in [
        ("Types", &options.kinds),
        ("Genres", &options.genres),
        ("Years", &options.years),
        ("Ratings", &options.ratings),
        ("Countries", &options.countries),
    ] {
        writeln!(out, "{name}: {}", values.join(", "))?;
    }
    Ok(())
}

pub fn write_comparison<W: Write + ?Sized>(
    out: &mut W,
    metrics: &[PlatformMetrics],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<12}{:>8}{:>9}{:>11}{:>9}{:>8}{:>9}",
        "Platform", "Titles", "Movies", "Avg min", "Seasons", "Genres", "Recent"
    )?;
    for m in metrics {
        writeln!(
            out,
            "{:<12}{:>8}{:>8.0}%{:>11.1}{:>9.1}{:>8}{:>8.0}%",
            m.platform.display_name(),
            m.total_titles,
            m.movie_share * 100.0,
            m.mean_movie_minutes,
            m.mean_seasons,
            m.genre_diversity,
            m.recent_share * 100.0,
        )?;
    }
    Ok(())
}
