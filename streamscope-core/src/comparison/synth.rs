//! Seeded generator for the synthetic comparison dataset.

use std::io::Write;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use streamscope_model::{Duration, Platform, Title, TitleKind};

use crate::{error::CatalogError, ingest::Catalog, ingest::Column};

const GENRES: &[&str] = &[
    "Dramas",
    "Comedies",
    "Action & Adventure",
    "Documentaries",
    "Kids' TV",
    "Thrillers",
    "Romantic Movies",
    "Horror Movies",
    "Anime Series",
    "Reality TV",
];

const RATINGS: &[&str] =
    &["G", "PG", "PG-13", "R", "TV-Y", "TV-PG", "TV-14", "TV-MA"];

const COUNTRIES: &[&str] = &[
    "United States",
    "India",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Canada",
    "France",
    "Spain",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July",
    "August", "September", "October", "November", "December",
];

const NEWEST_YEAR: u16 = 2021;

/// Per-platform shape of the generated catalog.
struct Profile {
    movie_share: f64,
    /// Years before [`NEWEST_YEAR`] a release may fall.
    release_span: u16,
    genre_bias: &'static [&'static str],
}

fn profile(platform: Platform) -> Profile {
    match platform {
        Platform::Netflix => Profile {
            movie_share: 0.70,
            release_span: 25,
            genre_bias: &["Dramas", "Comedies", "Documentaries"],
        },
        Platform::Hulu => Profile {
            movie_share: 0.45,
            release_span: 35,
            genre_bias: &["Comedies", "Reality TV", "Anime Series"],
        },
        Platform::DisneyPlus | Platform::Comparison => Profile {
            movie_share: 0.75,
            release_span: 60,
            genre_bias: &["Kids' TV", "Action & Adventure", "Comedies"],
        },
    }
}

/// Generate the comparison catalog: `per_platform` titles for each
/// streaming platform. Ids are `<platform slug>:<n>`, so equal seeds give
/// identical catalogs and [`super::split_by_platform`] can recover the
/// per-platform view.
pub fn synthesize(seed: u64, per_platform: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut titles = Vec::with_capacity(per_platform * 3);

    for platform in Platform::streaming() {
        let profile = profile(*platform);
        for n in 1..=per_platform {
            titles.push(synthetic_title(&mut rng, *platform, &profile, n));
        }
    }

    Catalog::new(Platform::Comparison, titles)
}

fn synthetic_title(
    rng: &mut StdRng,
    platform: Platform,
    profile: &Profile,
    n: usize,
) -> Title {
    let is_movie = rng.random_bool(profile.movie_share);
    let pool = if rng.random_bool(0.5) {
        profile.genre_bias
    } else {
        GENRES
    };
    let genre = pick(rng, pool);
    let second = pick(rng, GENRES);
    let genres = if second == genre {
        vec![genre.to_string()]
    } else {
        vec![genre.to_string(), second.to_string()]
    };
    let country = pick(rng, COUNTRIES).to_string();

    let release_year =
        NEWEST_YEAR - rng.random_range(0..=profile.release_span);
    let added_year = rng.random_range(release_year.max(2008)..=NEWEST_YEAR);
    let date_added = format!(
        "{} {}, {}",
        pick(rng, MONTHS),
        rng.random_range(1..=28),
        added_year
    );

    let duration = if is_movie {
        Duration::minutes(rng.random_range(70..=180))
    } else {
        Duration::seasons(rng.random_range(1..=8))
    };

    Title {
        show_id: format!("{}:{n}", platform.slug()),
        kind: if is_movie {
            TitleKind::Movie
        } else {
            TitleKind::TvShow
        },
        title: format!("{} Original #{n}", platform.display_name()),
        genre: genres[0].clone(),
        genres,
        release_year,
        rating: pick(rng, RATINGS).to_string(),
        duration,
        countries: vec![country.clone()],
        country,
        date_added,
        description: format!("Synthetic {} title for comparison.", platform),
    }
}

fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or(streamscope_model::UNKNOWN)
}

/// Write `catalog` with canonical headers so it loads back through
/// [`crate::ingest::parse_catalog`].
pub fn write_csv<W: Write>(
    catalog: &Catalog,
    writer: W,
) -> Result<(), CatalogError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(Column::ALL.iter().map(|column| column.canonical()))?;

    for title in &catalog.titles {
        let genres = title.genres.join(", ");
        let year = title.release_year.to_string();
        let duration = title.duration.to_string();
        let countries = title.countries.join(", ");
        csv.write_record([
            title.show_id.as_str(),
            title.kind.label(),
            title.title.as_str(),
            genres.as_str(),
            year.as_str(),
            title.rating.as_str(),
            duration.as_str(),
            countries.as_str(),
            title.date_added.as_str(),
            title.description.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
