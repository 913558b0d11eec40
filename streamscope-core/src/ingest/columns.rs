use csv::StringRecord;

/// Catalog columns the row parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ShowId,
    Kind,
    Title,
    ListedIn,
    ReleaseYear,
    Rating,
    Duration,
    Country,
    DateAdded,
    Description,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::ShowId,
        Column::Kind,
        Column::Title,
        Column::ListedIn,
        Column::ReleaseYear,
        Column::Rating,
        Column::Duration,
        Column::Country,
        Column::DateAdded,
        Column::Description,
    ];

    /// Header written by the CSV exporter.
    pub fn canonical(&self) -> &'static str {
        match self {
            Column::ShowId => "show_id",
            Column::Kind => "type",
            Column::Title => "title",
            Column::ListedIn => "listed_in",
            Column::ReleaseYear => "release_year",
            Column::Rating => "rating",
            Column::Duration => "duration",
            Column::Country => "country",
            Column::DateAdded => "date_added",
            Column::Description => "description",
        }
    }

    /// Alternative header spellings seen across platform exports.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::ShowId => &["id", "title_id"],
            Column::Kind => &["kind", "category"],
            Column::Title => &["name"],
            Column::ListedIn => &["genre", "genres"],
            Column::ReleaseYear => &["year", "released"],
            Column::Rating => {
                &["age_rating", "certification", "maturity_rating"]
            }
            Column::Duration => &["runtime", "length"],
            Column::Country => &["countries", "production_country"],
            Column::DateAdded => &["added", "added_date"],
            Column::Description => &["overview", "summary"],
        }
    }

    fn accepts(&self, normalized: &str) -> bool {
        self.canonical() == normalized
            || self.aliases().iter().any(|alias| *alias == normalized)
    }
}

/// Lowercase, strip a UTF-8 BOM, and fold spaces/hyphens into underscores
/// so `"Listed In"` and `"listed-in"` both resolve to `listed_in`.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Resolved position of each [`Column`] within one file's header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: [Option<usize>; 10],
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let normalized: Vec<String> =
            headers.iter().map(normalize_header).collect();

        let mut positions = [None; 10];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            // First matching header wins when a file repeats a column.
            *slot = normalized.iter().position(|h| column.accepts(h));
        }
        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions[column as usize]
    }

    /// Number of recognised columns.
    pub fn recognised(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    /// Trimmed, non-empty value of `column` in `record`.
    pub fn get<'r>(
        &self,
        record: &'r StringRecord,
        column: Column,
    ) -> Option<&'r str> {
        self.position(column)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
