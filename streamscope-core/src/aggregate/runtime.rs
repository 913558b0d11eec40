use serde::Serialize;
use streamscope_model::{DurationBucket, Title};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket: DurationBucket,
    pub label: &'static str,
    pub count: usize,
}

/// Partition titles into the four runtime buckets. Every bucket is listed,
/// in [`DurationBucket::all`] order, even when empty.
pub fn duration_buckets(titles: &[&Title]) -> Vec<BucketCount> {
    let mut counts = [0usize; 4];
    for title in titles {
        counts[DurationBucket::classify(&title.duration).index()] += 1;
    }

    DurationBucket::all()
        .iter()
        .map(|bucket| BucketCount {
            bucket: *bucket,
            label: bucket.label(),
            count: counts[bucket.index()],
        })
        .collect()
}

/// Release year against runtime for the scatter chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub show_id: String,
    pub title: String,
    pub release_year: u16,
    pub minutes: u32,
}

/// Movies with both a known release year and a known runtime.
pub fn duration_scatter(titles: &[&Title]) -> Vec<ScatterPoint> {
    titles
        .iter()
        .filter(|title| title.release_year != 0)
        .filter_map(|title| {
            title.duration.minutes_value().map(|minutes| ScatterPoint {
                show_id: title.show_id.clone(),
                title: title.title.clone(),
                release_year: title.release_year,
                minutes,
            })
        })
        .collect()
}
