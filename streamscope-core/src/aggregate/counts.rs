use std::collections::HashMap;

use serde::Serialize;
use streamscope_model::Title;

/// Label used when [`CategoryCounts::top`] folds the tail.
pub const OTHER: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    /// Position the category first appeared at in the input. Drives tie
    /// breaking and color assignment.
    #[serde(skip)]
    pub first_seen: usize,
}

/// Counts grouped by category, largest first; equal counts keep
/// first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts {
    entries: Vec<CategoryCount>,
}

impl CategoryCounts {
    /// Group `labels` in one pass. The map only resolves a label to its slot;
    /// output order comes from the slot vector and a stable sort.
    pub fn tally<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut slots: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<CategoryCount> = Vec::new();

        for label in labels {
            let slot = *slots.entry(label).or_insert_with(|| {
                entries.push(CategoryCount {
                    label: label.to_string(),
                    count: 0,
                    first_seen: entries.len(),
                });
                entries.len() - 1
            });
            entries[slot].count += 1;
        }

        entries.sort_by(|a, b| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every count; equals the number of tallied titles.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }

    /// Keep the `n` largest categories and fold the rest into [`OTHER`].
    pub fn top(&self, n: usize) -> Self {
        if self.entries.len() <= n {
            return self.clone();
        }

        let (head, tail) = self.entries.split_at(n);
        let mut entries = head.to_vec();
        entries.push(CategoryCount {
            label: OTHER.to_string(),
            count: tail.iter().map(|entry| entry.count).sum(),
            first_seen: usize::MAX,
        });
        Self { entries }
    }
}

pub fn genre_counts(titles: &[&Title]) -> CategoryCounts {
    CategoryCounts::tally(titles.iter().map(|title| title.genre.as_str()))
}

pub fn rating_counts(titles: &[&Title]) -> CategoryCounts {
    CategoryCounts::tally(titles.iter().map(|title| title.rating.as_str()))
}

pub fn country_counts(titles: &[&Title]) -> CategoryCounts {
    CategoryCounts::tally(titles.iter().map(|title| title.country.as_str()))
}

pub fn kind_counts(titles: &[&Title]) -> CategoryCounts {
    CategoryCounts::tally(titles.iter().map(|title| title.kind.label()))
}
