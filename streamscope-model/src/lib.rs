//! Core data model definitions shared across streamscope crates.
#![allow(missing_docs)]

pub mod duration;
pub mod error;
pub mod filter_types;
pub mod palette;
pub mod platform;
pub mod title;
pub mod title_kind;

// Intentionally curated re-exports for downstream consumers.
pub use duration::{Duration, DurationUnit};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{DurationBucket, UiTitleType};
pub use platform::Platform;
pub use title::{NOT_RATED, Title, UNKNOWN};
pub use title_kind::TitleKind;
