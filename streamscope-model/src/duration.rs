use std::fmt;

/// Unit the numeric duration prefix was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DurationUnit {
    Minutes,
    Seasons,
    #[default]
    Unknown,
}

/// Parsed `duration` column: `"94 min"`, `"1 Season"`, `"3 Seasons"`.
///
/// Text that does not match one of those shapes yields `value == 0` with
/// [`DurationUnit::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl Duration {
    pub const UNKNOWN: Duration = Duration {
        value: 0,
        unit: DurationUnit::Unknown,
    };

    pub fn minutes(value: u32) -> Self {
        Self {
            value,
            unit: DurationUnit::Minutes,
        }
    }

    pub fn seasons(value: u32) -> Self {
        Self {
            value,
            unit: DurationUnit::Seasons,
        }
    }

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if digits_end == 0 {
            return Self::UNKNOWN;
        }

        let Ok(value) = trimmed[..digits_end].parse::<u32>() else {
            return Self::UNKNOWN;
        };
        let suffix = trimmed[digits_end..].to_ascii_lowercase();

        // " Seasons" shares the " Season" prefix, one check covers both.
        if suffix.starts_with(" min") {
            Self::minutes(value)
        } else if suffix.starts_with(" season") {
            Self::seasons(value)
        } else {
            Self::UNKNOWN
        }
    }

    pub fn minutes_value(&self) -> Option<u32> {
        match self.unit {
            DurationUnit::Minutes if self.value > 0 => Some(self.value),
            _ => None,
        }
    }

    pub fn seasons_value(&self) -> Option<u32> {
        match self.unit {
            DurationUnit::Seasons if self.value > 0 => Some(self.value),
            _ => None,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.unit, self.value) {
            (DurationUnit::Minutes, v) => write!(f, "{v} min"),
            (DurationUnit::Seasons, 1) => write!(f, "1 Season"),
            (DurationUnit::Seasons, v) => write!(f, "{v} Seasons"),
            (DurationUnit::Unknown, _) => f.write_str(crate::UNKNOWN),
        }
    }
}
