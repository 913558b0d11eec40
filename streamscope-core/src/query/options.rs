use std::collections::HashSet;

use serde::Serialize;
use streamscope_model::{Title, TitleKind, UiTitleType};

use super::types::ALL;

/// Values offered by each filter dropdown, `"All"` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub kinds: Vec<String>,
    pub genres: Vec<String>,
    /// Newest first. Unknown years (`0`) are not offered.
    pub years: Vec<String>,
    pub ratings: Vec<String>,
    pub countries: Vec<String>,
}

impl FilterOptions {
    pub fn from_titles(titles: &[Title]) -> Self {
        let mut years: Vec<u16> = titles
            .iter()
            .map(|title| title.release_year)
            .filter(|year| *year != 0)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            kinds: kind_options(titles),
            genres: distinct(titles.iter().map(|t| t.genre.as_str())),
            years: with_all(years.into_iter().map(|year| year.to_string())),
            ratings: distinct(titles.iter().map(|t| t.rating.as_str())),
            countries: distinct(titles.iter().map(|t| t.country.as_str())),
        }
    }
}

/// The fixed type choices, plus `Unknown` when some row has no usable type.
fn kind_options(titles: &[Title]) -> Vec<String> {
    let mut kinds: Vec<String> = UiTitleType::all()
        .iter()
        .map(|kind| kind.label().to_string())
        .collect();
    if titles.iter().any(|title| title.kind == TitleKind::Unknown) {
        kinds.push(TitleKind::Unknown.label().to_string());
    }
    kinds
}

/// First-encounter order over the whole catalog; chart colors are resolved
/// against it.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    with_all(
        values
            .filter(|value| seen.insert(*value))
            .map(str::to_string),
    )
}

fn with_all(values: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(ALL.to_string()).chain(values).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_catalog;
    use crate::query::{FilterState, apply};
    use streamscope_model::Platform;

    #[test]
    fn options_follow_first_encounter() {
        let csv = "show_id,type,title,listed_in,release_year,rating,country\n\
                   1,Movie,A,Dramas,2019,PG,France\n\
                   2,Movie,B,Comedies,2021,PG,\n\
                   3,Movie,C,Dramas,,R,France\n\
                   4,Movie,D,Action,2019,PG,Japan\n";
        let catalog = parse_catalog(Platform::Netflix, csv.as_bytes()).unwrap();
        let options = FilterOptions::from_titles(&catalog.titles);

        assert_eq!(options.kinds, ["All", "Movie", "TV Show"]);
        assert_eq!(options.genres, ["All", "Dramas", "Comedies", "Action"]);
        assert_eq!(options.years, ["All", "2021", "2019"]);
        assert_eq!(options.ratings, ["All", "PG", "R"]);
        assert_eq!(options.countries, ["All", "France", "Unknown", "Japan"]);
    }

    #[test]
    fn unknown_kind_is_offered_only_when_present() {
        let csv = "show_id,type,title
1,Movie,A
2,Podcast,B
";
        let catalog = parse_catalog(Platform::Hulu, csv.as_bytes()).unwrap();
        let options = FilterOptions::from_titles(&catalog.titles);
        assert_eq!(options.kinds, ["All", "Movie", "TV Show", "Unknown"]);

        let filter = FilterState::default().with_kind(&options.kinds[3]);
        let matched = apply(&catalog.titles, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].show_id, "2");
    }
}
