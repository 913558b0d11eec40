use csv::StringRecord;
use streamscope_model::{Duration, NOT_RATED, Title, TitleKind, UNKNOWN};
use uuid::Uuid;

use super::columns::{Column, ColumnMap};

/// Build a [`Title`] from one CSV record, substituting the fixed sentinel for
/// every missing, blank or unparseable field.
pub fn parse_title(record: &StringRecord, columns: &ColumnMap) -> Title {
    let text = |column: Column| columns.get(record, column);

    let genres = split_tokens(text(Column::ListedIn));
    let countries = split_tokens(text(Column::Country));

    Title {
        show_id: text(Column::ShowId)
            .map(str::to_string)
            .unwrap_or_else(generated_id),
        kind: text(Column::Kind)
            .map(TitleKind::parse_lenient)
            .unwrap_or_default(),
        title: text_or(text(Column::Title), UNKNOWN),
        genre: genres[0].clone(),
        genres,
        release_year: text(Column::ReleaseYear).map(parse_year).unwrap_or(0),
        rating: text_or(text(Column::Rating), NOT_RATED),
        duration: text(Column::Duration)
            .map(Duration::parse)
            .unwrap_or(Duration::UNKNOWN),
        country: countries[0].clone(),
        countries,
        date_added: text_or(text(Column::DateAdded), UNKNOWN),
        description: text_or(text(Column::Description), UNKNOWN),
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}

/// Identifier for rows that arrive without a `show_id`.
fn generated_id() -> String {
    format!("gen-{}", Uuid::new_v4())
}

/// Split a multi-value column on commas. The first token is the canonical
/// category; the list is never empty.
pub fn split_tokens(value: Option<&str>) -> Vec<String> {
    let tokens: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        vec![UNKNOWN.to_string()]
    } else {
        tokens
    }
}

/// Parse a release year, tolerating the `2019.0` shape spreadsheet exports
/// produce. Anything else that is not a year yields `0`.
pub fn parse_year(raw: &str) -> u16 {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    digits.parse::<u16>().unwrap_or(0)
}
