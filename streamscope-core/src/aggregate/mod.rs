//! Aggregate views over a filtered title slice.
//!
//! Each view is an independent pure function. Output order never depends on
//! hash iteration: category views sort by count with first-encounter tie
//! breaking, timelines are keyed by an ordered map, and runtime buckets use a
//! fixed order. Equal input therefore serializes to identical bytes.

pub mod chart;
pub mod counts;
pub mod runtime;
pub mod timeline;

pub use chart::ChartSeries;
pub use counts::{
    CategoryCount, CategoryCounts, OTHER, country_counts, genre_counts,
    kind_counts, rating_counts,
};
pub use runtime::{
    BucketCount, ScatterPoint, duration_buckets, duration_scatter,
};
pub use timeline::{YearPoint, additions_by_year, yearly_growth};
