use serde::{Deserialize, Serialize};
use streamscope_model::{ModelError, UiTitleType};

/// Selection value meaning "no constraint".
pub const ALL: &str = "All";

/// Current user-selected combination of filter constraints.
///
/// Dropdown dimensions hold the raw selection text; `"All"` (any case) or an
/// empty string leaves that dimension unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub kind: String,
    pub genre: String,
    pub year: String,
    pub search: String,
    /// Zoom window over release years.
    pub year_range: Option<YearRange>,
    pub rating: String,
    pub country: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            kind: ALL.to_string(),
            genre: ALL.to_string(),
            year: ALL.to_string(),
            search: String::new(),
            year_range: None,
            rating: ALL.to_string(),
            country: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_title_type(self, kind: UiTitleType) -> Self {
        self.with_kind(kind.label())
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_year_range(mut self, range: Option<YearRange>) -> Self {
        self.year_range = range;
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// True when no dimension constrains the collection.
    pub fn is_unconstrained(&self) -> bool {
        is_all(&self.kind)
            && is_all(&self.genre)
            && is_all(&self.year)
            && self.search.trim().is_empty()
            && self.year_range.is_none()
            && is_all(&self.rating)
            && is_all(&self.country)
    }
}

/// `"All"`/`"all"` or blank.
pub fn is_all(selection: &str) -> bool {
    let trimmed = selection.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL)
}

/// Inclusive release-year window used to zoom the timeline charts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    /// Bounds are swapped when given in reverse.
    pub fn new(start: u16, end: u16) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn contains(&self, year: u16) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Parse `1990..2000`, `1990..=2000` or `1990-2000`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidSelection {
            field: "year range",
            value: raw.to_string(),
        };
        let trimmed = raw.trim();
        let (start, end) = trimmed
            .split_once("..=")
            .or_else(|| trimmed.split_once(".."))
            .or_else(|| trimmed.split_once('-'))
            .ok_or_else(invalid)?;
        let start = start.trim().parse::<u16>().map_err(|_| invalid())?;
        let end = end.trim().parse::<u16>().map_err(|_| invalid())?;
        Ok(Self::new(start, end))
    }
}
