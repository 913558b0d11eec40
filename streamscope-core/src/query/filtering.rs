//! Translation of UI filter state into a title predicate.
//!
//! Every active dimension is conjunctive. Selections are normalised once in
//! [`CompiledFilter::new`] so the per-title check does no allocation.

use streamscope_model::{Title, TitleKind};

use super::types::{FilterState, YearRange, is_all};

/// One normalised dropdown dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Constraint<T> {
    Any,
    Exactly(T),
    /// The selection can never match, e.g. a year that is not a number.
    Nothing,
}

impl<T: PartialEq> Constraint<T> {
    fn admits(&self, value: &T) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Exactly(expected) => expected == value,
            Constraint::Nothing => false,
        }
    }
}

/// Filter state resolved against the title model.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    kind: Constraint<TitleKind>,
    genre: Option<String>,
    year: Constraint<u16>,
    search: Option<String>,
    year_range: Option<YearRange>,
    rating: Option<String>,
    country: Option<String>,
}

impl CompiledFilter {
    pub fn new(state: &FilterState) -> Self {
        Self {
            kind: kind_constraint(&state.kind),
            genre: text_constraint(&state.genre),
            year: year_constraint(&state.year),
            search: Some(state.search.trim().to_lowercase())
                .filter(|needle| !needle.is_empty()),
            year_range: state.year_range,
            rating: text_constraint(&state.rating),
            country: text_constraint(&state.country),
        }
    }

    pub fn matches(&self, title: &Title) -> bool {
        self.kind.admits(&title.kind)
            && same_text(self.genre.as_deref(), &title.genre)
            && self.year.admits(&title.release_year)
            && self
                .year_range
                .is_none_or(|range| range.contains(title.release_year))
            && same_text(self.rating.as_deref(), &title.rating)
            && same_text(self.country.as_deref(), &title.country)
            && self.search.as_deref().is_none_or(|needle| {
                title.title.to_lowercase().contains(needle)
            })
    }
}

fn kind_constraint(selection: &str) -> Constraint<TitleKind> {
    if is_all(selection) {
        return Constraint::Any;
    }
    let names_unknown = selection
        .trim()
        .eq_ignore_ascii_case(TitleKind::Unknown.label());
    match TitleKind::parse_lenient(selection) {
        TitleKind::Unknown if !names_unknown => Constraint::Nothing,
        kind => Constraint::Exactly(kind),
    }
}

fn year_constraint(selection: &str) -> Constraint<u16> {
    if is_all(selection) {
        return Constraint::Any;
    }
    selection
        .trim()
        .parse::<u16>()
        .map(Constraint::Exactly)
        .unwrap_or(Constraint::Nothing)
}

fn text_constraint(selection: &str) -> Option<String> {
    if is_all(selection) {
        None
    } else {
        Some(selection.trim().to_string())
    }
}

fn same_text(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|expected| expected.eq_ignore_ascii_case(actual))
}

/// Titles matching `state`, in input order.
pub fn apply<'a>(titles: &'a [Title], state: &FilterState) -> Vec<&'a Title> {
    if state.is_unconstrained() {
        return titles.iter().collect();
    }
    let filter = CompiledFilter::new(state);
    titles.iter().filter(|title| filter.matches(title)).collect()
}
