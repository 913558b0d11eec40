//! Row parser turning catalog CSV text into [`Title`] records.
//!
//! Platform exports disagree on column names and routinely leave fields
//! blank, so parsing is lenient by construction: unknown headers are ignored,
//! short rows are accepted, and every missing value becomes a sentinel. The
//! only hard failures are a missing header row and CSV-level errors such as
//! invalid UTF-8.

pub mod columns;
pub mod row;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use streamscope_model::{Platform, Title};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

pub use columns::{Column, ColumnMap};
pub use row::parse_title;

/// All titles of one platform, in CSV row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub platform: Platform,
    pub titles: Vec<Title>,
}

impl Catalog {
    pub fn new(platform: Platform, titles: Vec<Title>) -> Self {
        Self { platform, titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn find(&self, show_id: &str) -> Option<&Title> {
        self.titles.iter().find(|title| title.show_id == show_id)
    }
}

/// Parse a whole catalog export.
pub fn parse_catalog(platform: Platform, bytes: &[u8]) -> Result<Catalog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(CatalogError::MissingHeader);
    }

    let columns = ColumnMap::from_headers(&headers);
    if columns.recognised() == 0 {
        warn!(
            %platform,
            "no known columns in catalog header; every field will default"
        );
    }

    let mut titles = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }
        titles.push(parse_title(&record, &columns));
    }

    debug!(
        %platform,
        titles = titles.len(),
        columns = columns.recognised(),
        "parsed catalog"
    );
    Ok(Catalog::new(platform, titles))
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
