//! # streamscope core
//!
//! Data pipeline behind the streamscope catalog dashboards: CSV catalogs are
//! parsed into typed [`Title`](streamscope_model::Title) records, narrowed by
//! the user's filter state, and summarised into the aggregate views that feed
//! each chart.
//!
//! ## Overview
//!
//! - [`ingest`]: row parser with default substitution for missing fields
//! - [`query`]: conjunctive filter predicate and dropdown options
//! - [`aggregate`]: independent, deterministic aggregate views
//! - [`fetch`]: catalog loading with a fixed retry policy
//! - [`dashboard`]: per-catalog state that recomputes views on filter change
//! - [`comparison`]: synthetic comparison dataset and cross-platform metrics
//!
//! ## Examples
//!
//! ```
//! use streamscope_core::{dashboard::Dashboard, ingest, query::FilterState};
//! use streamscope_model::Platform;
//!
//! let csv = "show_id,type,title,listed_in,release_year,rating,duration\n\
//!            s1,Movie,Alpha,Dramas,2020,PG,95 min\n\
//!            s2,TV Show,Beta,Comedies,2021,TV-MA,2 Seasons\n";
//! let catalog = ingest::parse_catalog(Platform::Netflix, csv.as_bytes())?;
//! let mut dashboard = Dashboard::new(catalog);
//! dashboard.set_filter(FilterState::default().with_kind("Movie"));
//! assert_eq!(dashboard.snapshot().filtered_titles, 1);
//! # Ok::<(), streamscope_core::error::CatalogError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Aggregate views computed from a filtered title slice
pub mod aggregate;

/// Synthetic comparison dataset and cross-platform metrics
pub mod comparison;

/// Filter state bound to one catalog, with cached snapshot
pub mod dashboard;

/// Error types and error handling utilities
pub mod error;

/// Catalog loading from files or URLs with retry
pub mod fetch;

/// CSV row parsing into typed titles
pub mod ingest;

/// Filter predicate and dropdown options
pub mod query;

pub use dashboard::{Dashboard, DashboardSnapshot, TitleDetail};
pub use error::{CatalogError, FetchError, TransportError};
pub use ingest::Catalog;
pub use query::FilterState;
