use serde::Serialize;
use streamscope_model::palette::color_for;

use super::counts::{CategoryCounts, OTHER};
use crate::query::is_all;

/// Neutral color for the folded [`OTHER`] slice.
const OTHER_COLOR: &str = "#7F8C8D";

/// Chart-ready projection of a category view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub colors: Vec<&'static str>,
}

impl ChartSeries {
    /// Colors are resolved against `order`, the catalog-wide first-encounter
    /// order of the dimension (dropdown options, a leading `"All"` is
    /// skipped). A category therefore keeps its color whatever the filter
    /// removes. Labels missing from `order` fall back to their position in
    /// `counts`.
    pub fn from_counts(
        name: impl Into<String>,
        counts: &CategoryCounts,
        order: &[String],
    ) -> Self {
        let entries = counts.entries();
        let slot = |label: &str| {
            order
                .iter()
                .filter(|known| !is_all(known))
                .position(|known| known == label)
        };

        Self {
            name: name.into(),
            labels: entries.iter().map(|e| e.label.clone()).collect(),
            values: entries.iter().map(|e| e.count).collect(),
            colors: entries
                .iter()
                .map(|e| {
                    if e.label == OTHER && e.first_seen == usize::MAX {
                        OTHER_COLOR
                    } else {
                        color_for(slot(&e.label).unwrap_or(e.first_seen))
                    }
                })
                .collect(),
        }
    }
}
