use chrono::{Datelike, NaiveDate};

use crate::{Duration, TitleKind};

/// Placeholder for any missing or blank text column.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing maturity rating.
pub const NOT_RATED: &str = "Not Rated";

/// One movie or show record from a platform catalog.
///
/// Every field is populated. Missing source values are replaced with
/// [`UNKNOWN`], [`NOT_RATED`], `0` or a generated id at parse time so
/// downstream aggregation never has to branch on absence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Title {
    pub show_id: String,
    pub kind: TitleKind,
    pub title: String,
    /// Every token of the `listed_in` column, in source order.
    pub genres: Vec<String>,
    /// First token of `listed_in`; the category used by filters and charts.
    pub genre: String,
    pub release_year: u16,
    pub rating: String,
    pub duration: Duration,
    /// Every token of the `country` column, in source order.
    pub countries: Vec<String>,
    /// First token of `country`.
    pub country: String,
    pub date_added: String,
    pub description: String,
}

impl Title {
    /// Date the title was added to the catalog, when the column holds either
    /// the long form used by the platform exports (`September 25, 2021`) or
    /// an ISO date.
    pub fn added_on(&self) -> Option<NaiveDate> {
        let raw = self.date_added.trim();
        NaiveDate::parse_from_str(raw, "%B %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Year component of [`Title::added_on`], `0` when unknown.
    pub fn added_year(&self) -> u16 {
        self.added_on()
            .and_then(|date| u16::try_from(date.year()).ok())
            .unwrap_or(0)
    }

    pub fn is_movie(&self) -> bool {
        self.kind == TitleKind::Movie
    }

    pub fn is_show(&self) -> bool {
        self.kind == TitleKind::TvShow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date_added: &str) -> Title {
        Title {
            show_id: "s1".into(),
            kind: TitleKind::Movie,
            title: "Dick Johnson Is Dead".into(),
            genres: vec!["Documentaries".into()],
            genre: "Documentaries".into(),
            release_year: 2020,
            rating: "PG-13".into(),
            duration: Duration::minutes(90),
            countries: vec!["United States".into()],
            country: "United States".into(),
            date_added: date_added.into(),
            description: UNKNOWN.into(),
        }
    }

    #[test]
    fn parses_long_and_iso_dates() {
        let long = sample("September 25, 2021");
        assert_eq!(long.added_on(), NaiveDate::from_ymd_opt(2021, 9, 25));
        assert_eq!(long.added_year(), 2021);

        let iso = sample(" 2019-11-12 ");
        assert_eq!(iso.added_year(), 2019);
    }

    #[test]
    fn unparseable_date_has_no_year() {
        let title = sample(UNKNOWN);
        assert_eq!(title.added_on(), None);
        assert_eq!(title.added_year(), 0);
    }
}
