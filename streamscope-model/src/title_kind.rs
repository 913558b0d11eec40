use std::fmt::Display;
use std::fmt::Formatter;

/// Whether a catalog row describes a movie or an episodic show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TitleKind {
    /// Feature-length title, duration counted in minutes
    Movie,
    /// Episodic title, duration counted in seasons
    TvShow,
    /// The `type` column was missing or not recognised
    #[default]
    Unknown,
}

impl TitleKind {
    /// Map the loosely-typed `type` column to a kind. Platform files disagree
    /// on spelling ("TV Show", "tv", "Series"), so matching is lenient.
    pub fn parse_lenient(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "movie" | "movies" | "film" => TitleKind::Movie,
            "tv show" | "tv shows" | "tv" | "show" | "series" | "tv series" => {
                TitleKind::TvShow
            }
            _ => TitleKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleKind::Movie => "Movie",
            TitleKind::TvShow => "TV Show",
            TitleKind::Unknown => "Unknown",
        }
    }
}

impl Display for TitleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
