use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

/// Where a catalog export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = url::ParseError;

    /// Anything starting with `http://` or `https://` is a URL, everything
    /// else a filesystem path.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Url::parse(trimmed).map(CatalogSource::Url)
        } else {
            Ok(CatalogSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{url}"),
        }
    }
}
