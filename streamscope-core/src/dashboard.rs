//! One catalog bound to the user's filter state.
//!
//! The snapshot of every aggregate view is recomputed when the filter
//! changes and cached until the next change, so rendering can read it as
//! often as it likes.

use chrono::NaiveDate;
use serde::Serialize;
use streamscope_model::{Platform, Title};
use tracing::debug;

use crate::{
    aggregate::{
        self, BucketCount, CategoryCounts, ChartSeries, ScatterPoint, YearPoint,
    },
    ingest::Catalog,
    query::{self, FilterOptions, FilterState},
};

/// Categories shown before the remainder is folded into "Other".
pub const DEFAULT_TOP_N: usize = 10;

/// Every aggregate view for the current filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub platform: Platform,
    pub filter: FilterState,
    pub total_titles: usize,
    pub filtered_titles: usize,
    pub kind_counts: CategoryCounts,
    pub genre_counts: CategoryCounts,
    pub rating_counts: CategoryCounts,
    /// Top-N countries, remainder folded into "Other".
    pub country_counts: CategoryCounts,
    pub yearly_growth: Vec<YearPoint>,
    pub additions_by_year: Vec<YearPoint>,
    pub duration_buckets: Vec<BucketCount>,
    pub duration_scatter: Vec<ScatterPoint>,
    pub options: FilterOptions,
}

impl DashboardSnapshot {
    fn compute(
        catalog: &Catalog,
        filter: &FilterState,
        options: &FilterOptions,
        top_n: usize,
    ) -> Self {
        let filtered = query::apply(&catalog.titles, filter);

        Self {
            platform: catalog.platform,
            filter: filter.clone(),
            total_titles: catalog.len(),
            filtered_titles: filtered.len(),
            kind_counts: aggregate::kind_counts(&filtered),
            genre_counts: aggregate::genre_counts(&filtered),
            rating_counts: aggregate::rating_counts(&filtered),
            country_counts: aggregate::country_counts(&filtered).top(top_n),
            yearly_growth: aggregate::yearly_growth(&filtered),
            additions_by_year: aggregate::additions_by_year(&filtered),
            duration_buckets: aggregate::duration_buckets(&filtered),
            duration_scatter: aggregate::duration_scatter(&filtered),
            options: options.clone(),
        }
    }

    /// Category views projected for the chart widgets. Colors follow the
    /// catalog-wide option order, not the filtered slice.
    pub fn charts(&self) -> Vec<ChartSeries> {
        let options = &self.options;
        vec![
            ChartSeries::from_counts(
                "type",
                &self.kind_counts,
                &options.kinds,
            ),
            ChartSeries::from_counts(
                "genre",
                &self.genre_counts,
                &options.genres,
            ),
            ChartSeries::from_counts(
                "rating",
                &self.rating_counts,
                &options.ratings,
            ),
            ChartSeries::from_counts(
                "country",
                &self.country_counts,
                &options.countries,
            ),
        ]
    }
}

/// Drill-down record for a single title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleDetail {
    #[serde(flatten)]
    pub title: Title,
    pub added_on: Option<NaiveDate>,
    pub duration_label: String,
}

impl From<&Title> for TitleDetail {
    fn from(title: &Title) -> Self {
        Self {
            added_on: title.added_on(),
            duration_label: title.duration.to_string(),
            title: title.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    filter: FilterState,
    options: FilterOptions,
    top_n: usize,
    snapshot: DashboardSnapshot,
}

impl Dashboard {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_top_n(catalog, DEFAULT_TOP_N)
    }

    pub fn with_top_n(catalog: Catalog, top_n: usize) -> Self {
        let filter = FilterState::default();
        let options = FilterOptions::from_titles(&catalog.titles);
        let snapshot =
            DashboardSnapshot::compute(&catalog, &filter, &options, top_n);
        Self {
            catalog,
            filter,
            options,
            top_n,
            snapshot,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Replace the filter state and recompute every view. Setting an equal
    /// filter keeps the cached snapshot.
    pub fn set_filter(&mut self, filter: FilterState) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.snapshot = DashboardSnapshot::compute(
            &self.catalog,
            &self.filter,
            &self.options,
            self.top_n,
        );
        debug!(
            platform = %self.catalog.platform,
            filtered = self.snapshot.filtered_titles,
            "dashboard recomputed"
        );
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    /// Titles passing the current filter, in catalog order.
    pub fn filtered_titles(&self) -> Vec<&Title> {
        query::apply(&self.catalog.titles, &self.filter)
    }

    pub fn title_detail(&self, show_id: &str) -> Option<TitleDetail> {
        self.catalog.find(show_id).map(TitleDetail::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_catalog;

    const CSV: &str = "\
show_id,type,title,listed_in,release_year,rating,duration,country,date_added
d1,Movie,Alpha,\"Action, Comedy\",2019,PG,101 min,\"USA, Canada\",\"March 1, 2020\"
d2,TV Show,Beta,Animation,2020,TV-Y,2 Seasons,Japan,\"April 2, 2021\"
d3,Movie,Gamma,Action,2020,PG-13,88 min,USA,
d4,Movie,Delta,Comedy,,G,150 min,,
";

    fn dashboard() -> Dashboard {
        Dashboard::new(
            parse_catalog(Platform::DisneyPlus, CSV.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn initial_snapshot_covers_whole_catalog() {
        let dashboard = dashboard();
        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.total_titles, 4);
        assert_eq!(snapshot.filtered_titles, 4);
        assert_eq!(snapshot.genre_counts.get("Action"), Some(2));
        assert_eq!(snapshot.country_counts.total(), 4);
        assert_eq!(snapshot.yearly_growth.first().map(|p| p.year), Some(0));
    }

    #[test]
    fn filter_change_recomputes_views() {
        let mut dashboard = dashboard();
        dashboard.set_filter(FilterState::default().with_kind("Movie"));
        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.filtered_titles, 3);
        assert_eq!(snapshot.kind_counts.get("TV Show"), None);
        let bucket_total: usize =
            snapshot.duration_buckets.iter().map(|b| b.count).sum();
        assert_eq!(bucket_total, 3);
        assert_eq!(dashboard.filtered_titles().len(), 3);
        // Options come from the full catalog, not the filtered slice.
        assert!(snapshot.options.kinds.contains(&"TV Show".to_string()));
        assert!(snapshot.options.genres.contains(&"Animation".to_string()));
    }

    #[test]
    fn snapshots_are_byte_identical_for_equal_state() {
        let filter = FilterState::default().with_genre("Action");
        let mut a = dashboard();
        let mut b = dashboard();
        a.set_filter(filter.clone());
        b.set_filter(filter);
        assert_eq!(
            serde_json::to_string(a.snapshot()).unwrap(),
            serde_json::to_string(b.snapshot()).unwrap()
        );
    }

    #[test]
    fn drill_down() {
        let dashboard = dashboard();
        let detail = dashboard.title_detail("d1").unwrap();
        assert_eq!(detail.title.genres, ["Action", "Comedy"]);
        assert_eq!(detail.title.countries, ["USA", "Canada"]);
        assert_eq!(detail.added_on, NaiveDate::from_ymd_opt(2020, 3, 1));
        assert_eq!(detail.duration_label, "101 min");
        assert!(dashboard.title_detail("missing").is_none());
    }

    fn chart_color(
        dashboard: &Dashboard,
        chart: &str,
        label: &str,
    ) -> &'static str {
        let charts = dashboard.snapshot().charts();
        let series = charts
            .iter()
            .find(|series| series.name == chart)
            .unwrap();
        let slot = series.labels.iter().position(|l| l == label).unwrap();
        series.colors[slot]
    }

    #[test]
    fn chart_colors_survive_filter_changes() {
        let csv = "show_id,type,title,listed_in\n\
                   a,Movie,One,Dramas\n\
                   b,TV Show,Two,Comedies\n\
                   c,TV Show,Three,Comedies\n";
        let mut dashboard = Dashboard::new(
            parse_catalog(Platform::Netflix, csv.as_bytes()).unwrap(),
        );
        let before = chart_color(&dashboard, "genre", "Comedies");
        let show_before = chart_color(&dashboard, "type", "TV Show");

        dashboard.set_filter(FilterState::default().with_kind("TV Show"));
        assert_eq!(chart_color(&dashboard, "genre", "Comedies"), before);
        assert_eq!(chart_color(&dashboard, "type", "TV Show"), show_before);
    }

    #[test]
    fn charts_keep_totals() {
        let dashboard = dashboard();
        for series in dashboard.snapshot().charts() {
            assert_eq!(
                series.values.iter().sum::<usize>(),
                4,
                "{}",
                series.name
            );
            assert_eq!(series.labels.len(), series.colors.len());
        }
    }
}
