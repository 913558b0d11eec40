use std::fmt;

use crate::{Duration, DurationUnit, TitleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiTitleType {
    #[default]
    All,
    Movie,
    TvShow,
}

impl UiTitleType {
    pub fn all() -> &'static [UiTitleType] {
        use UiTitleType::*;
        &[All, Movie, TvShow]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiTitleType::All => "All",
            UiTitleType::Movie => "Movie",
            UiTitleType::TvShow => "TV Show",
        }
    }

    /// Parse a dropdown value. `None` for text that names no type.
    pub fn from_selection(raw: &str) -> Option<UiTitleType> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Some(UiTitleType::All);
        }
        match TitleKind::parse_lenient(trimmed) {
            TitleKind::Movie => Some(UiTitleType::Movie),
            TitleKind::TvShow => Some(UiTitleType::TvShow),
            TitleKind::Unknown => None,
        }
    }

    pub fn matches(&self, kind: TitleKind) -> bool {
        match self {
            UiTitleType::All => true,
            UiTitleType::Movie => kind == TitleKind::Movie,
            UiTitleType::TvShow => kind == TitleKind::TvShow,
        }
    }
}

impl fmt::Display for UiTitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Runtime buckets used by the duration chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DurationBucket {
    Short,    // < 90 min, or unknown
    Standard, // 90..=120 min
    Long,     // > 120 min
    Episodic, // counted in seasons
}

impl DurationBucket {
    pub fn all() -> &'static [DurationBucket] {
        use DurationBucket::*;
        &[Short, Standard, Long, Episodic]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Short => "Under 90 min",
            DurationBucket::Standard => "90-120 min",
            DurationBucket::Long => "Over 120 min",
            DurationBucket::Episodic => "Series",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DurationBucket::Short => 0,
            DurationBucket::Standard => 1,
            DurationBucket::Long => 2,
            DurationBucket::Episodic => 3,
        }
    }

    pub fn classify(duration: &Duration) -> DurationBucket {
        match duration.unit {
            DurationUnit::Seasons => DurationBucket::Episodic,
            DurationUnit::Unknown => DurationBucket::Short,
            DurationUnit::Minutes => match duration.value {
                0..90 => DurationBucket::Short,
                90..=120 => DurationBucket::Standard,
                _ => DurationBucket::Long,
            },
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
