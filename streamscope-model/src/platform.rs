use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Catalog a dashboard is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Platform {
    Netflix,
    Hulu,
    DisneyPlus,
    /// Synthetic dataset used by the cross-platform comparison dashboard
    Comparison,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        use Platform::*;
        &[Netflix, Hulu, DisneyPlus, Comparison]
    }

    /// Platforms backed by a real catalog file.
    pub fn streaming() -> &'static [Platform] {
        use Platform::*;
        &[Netflix, Hulu, DisneyPlus]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Netflix => "netflix",
            Platform::Hulu => "hulu",
            Platform::DisneyPlus => "disney-plus",
            Platform::Comparison => "comparison",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::Hulu => "Hulu",
            Platform::DisneyPlus => "Disney+",
            Platform::Comparison => "Comparison",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Platform::Netflix => "netflix_titles.csv",
            Platform::Hulu => "hulu_titles.csv",
            Platform::DisneyPlus => "disney_plus_titles.csv",
            Platform::Comparison => "comparison_titles.csv",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Platform::all()
            .iter()
            .copied()
            .find(|platform| {
                platform.slug().eq_ignore_ascii_case(needle)
                    || platform.display_name().eq_ignore_ascii_case(needle)
            })
            .or_else(|| match needle.to_ascii_lowercase().as_str() {
                "disney" | "disneyplus" | "disney_plus" => {
                    Some(Platform::DisneyPlus)
                }
                _ => None,
            })
            .ok_or_else(|| ModelError::UnknownPlatform(raw.to_string()))
    }
}
