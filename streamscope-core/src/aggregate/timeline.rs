use std::collections::BTreeMap;

use serde::Serialize;
use streamscope_model::Title;

/// One point on a year axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPoint {
    /// `0` collects titles whose year is unknown.
    pub year: u16,
    pub count: usize,
    /// Running total up to and including this point.
    pub cumulative: usize,
    /// Percent change of `count` against the previous known year. Always
    /// `0.0` for the first known year and for year `0`.
    pub growth: f64,
}

/// Titles per release year, ascending, with growth against the previous
/// listed year.
pub fn yearly_growth(titles: &[&Title]) -> Vec<YearPoint> {
    timeline(titles.iter().map(|title| title.release_year))
}

/// Titles per year added to the catalog (area chart).
pub fn additions_by_year(titles: &[&Title]) -> Vec<YearPoint> {
    timeline(titles.iter().map(|title| title.added_year()))
}

fn timeline(years: impl Iterator<Item = u16>) -> Vec<YearPoint> {
    let mut per_year: BTreeMap<u16, usize> = BTreeMap::new();
    for year in years {
        *per_year.entry(year).or_default() += 1;
    }

    let mut cumulative = 0;
    let mut previous: Option<usize> = None;
    per_year
        .into_iter()
        .map(|(year, count)| {
            cumulative += count;
            // The unknown-year bucket is listed but is no one's baseline.
            if year == 0 {
                return YearPoint {
                    year,
                    count,
                    cumulative,
                    growth: 0.0,
                };
            }
            let growth = match previous {
                Some(prev) if prev > 0 => {
                    (count as f64 - prev as f64) / prev as f64 * 100.0
                }
                _ => 0.0,
            };
            previous = Some(count);
            YearPoint {
                year,
                count,
                cumulative,
                growth,
            }
        })
        .collect()
}
